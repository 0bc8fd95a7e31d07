//! Activity identity and the polymorphic activity record.
//!
//! # Responsibility
//! - Define `ActivityId` and the per-variant `IdSequence` generator.
//! - Wrap Task and Event variants behind one `Activity` type.
//!
//! # Invariants
//! - Task and Event numbering is independent; both start at 1.
//! - `ActivityId` includes the kind, so `Task 1` and `Event 1` never collide.
//!
//! # See also
//! - model::task, model::event

use crate::model::event::Event;
use crate::model::task::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::cell::Cell;
use std::fmt::{Display, Formatter};

/// Creation dates and event dates share this rendering.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Activity variant discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Task,
    Event,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Event => "event",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "task" => Some(Self::Task),
            "event" => Some(Self::Event),
            _ => None,
        }
    }
}

/// Identity of one activity.
///
/// Renders as the bare number; the kind only disambiguates storage lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActivityId {
    pub kind: ActivityKind,
    pub number: u32,
}

impl ActivityId {
    pub fn task(number: u32) -> Self {
        Self {
            kind: ActivityKind::Task,
            number,
        }
    }

    pub fn event(number: u32) -> Self {
        Self {
            kind: ActivityKind::Event,
            number,
        }
    }
}

impl Display for ActivityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Sequential number generator for one activity kind.
///
/// Owned by whichever component creates activities; there is no process-wide
/// counter.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: Cell<u32>,
}

impl IdSequence {
    /// Creates a sequence whose first number is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence whose first number is `last + 1`.
    ///
    /// Used when resuming from persisted activities.
    pub fn starting_after(last: u32) -> Self {
        Self {
            last: Cell::new(last),
        }
    }

    /// Returns the most recently issued number, or the resume point.
    pub fn last_issued(&self) -> u32 {
        self.last.get()
    }

    /// Issues the next number, or `None` once `u32::MAX` has been issued.
    ///
    /// An exhausted sequence stays at `u32::MAX`.
    pub(crate) fn next_number(&self) -> Option<u32> {
        let number = self.last.get().checked_add(1)?;
        self.last.set(number);
        Some(number)
    }
}

/// A Task or an Event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Activity {
    Task(Task),
    Event(Event),
}

impl Activity {
    pub fn id(&self) -> ActivityId {
        match self {
            Self::Task(task) => task.id(),
            Self::Event(event) => event.id(),
        }
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Task(_) => ActivityKind::Task,
            Self::Event(_) => ActivityKind::Event,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Task(task) => task.description(),
            Self::Event(event) => event.description(),
        }
    }

    pub fn created_on(&self) -> NaiveDate {
        match self {
            Self::Task(task) => task.created_on(),
            Self::Event(event) => event.created_on(),
        }
    }

    /// Short one-line form; content depends on the variant.
    pub fn detail(&self) -> String {
        match self {
            Self::Task(task) => task.detail(),
            Self::Event(event) => event.detail(),
        }
    }

    pub fn render_summary(&self) -> String {
        self.to_string()
    }

    pub fn as_task(&self) -> Option<&Task> {
        match self {
            Self::Task(task) => Some(task),
            Self::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Self::Task(_) => None,
            Self::Event(event) => Some(event),
        }
    }

    /// Returns the task status, or `None` for events.
    pub fn task_status(&self) -> Option<TaskStatus> {
        self.as_task().map(Task::status)
    }
}

impl Display for Activity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task(task) => Display::fmt(task, f),
            Self::Event(event) => Display::fmt(event, f),
        }
    }
}

impl From<Task> for Activity {
    fn from(value: Task) -> Self {
        Self::Task(value)
    }
}

impl From<Event> for Activity {
    fn from(value: Event) -> Self {
        Self::Event(value)
    }
}
