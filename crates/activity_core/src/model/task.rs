//! Task variant of `Activity`.
//!
//! # Invariants
//! - Constructed only through `Task::create` (or the crate-private restore
//!   path used by stores).
//! - `status` is the only field that changes after creation.

use crate::model::activity::{ActivityId, ActivityKind, IdSequence, DATE_FORMAT};
use crate::model::validation::{validate_description, ValidationError};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Task lifecycle state. Both transitions are always allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Open,
    Closed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "OPEN" => Some(Self::Open),
            "CLOSED" => Some(Self::Closed),
            _ => None,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actionable activity with an open/closed status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: ActivityId,
    created_on: NaiveDate,
    description: String,
    status: TaskStatus,
}

impl Task {
    /// Creates an open task stamped with today's local date.
    ///
    /// # Errors
    /// - `ValidationError::BlankDescription` when `description` is blank.
    ///   No number is drawn from `ids` in that case.
    /// - `ValidationError::IdsExhausted` when `ids` has nothing left to issue.
    pub fn create(
        ids: &IdSequence,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        validate_description(&description)?;

        let number = ids
            .next_number()
            .ok_or(ValidationError::IdsExhausted(ActivityKind::Task))?;

        Ok(Self {
            id: ActivityId::task(number),
            created_on: Local::now().date_naive(),
            description,
            status: TaskStatus::Open,
        })
    }

    /// Rebuilds a persisted task, re-applying field validation.
    pub(crate) fn restore(
        number: u32,
        created_on: NaiveDate,
        description: String,
        status: TaskStatus,
    ) -> Result<Self, ValidationError> {
        validate_description(&description)?;
        Ok(Self {
            id: ActivityId::task(number),
            created_on,
            description,
            status,
        })
    }

    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub fn close(&mut self) {
        self.status = TaskStatus::Closed;
    }

    pub fn reopen(&mut self) {
        self.status = TaskStatus::Open;
    }

    /// `"{id} - {description}"`.
    pub fn detail(&self) -> String {
        format!("{} - {}", self.id, self.description)
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Task=[id: {}, creationDate: {}, description: {}, status: {}]",
            self.id,
            self.created_on.format(DATE_FORMAT),
            self.description,
            self.status
        )
    }
}
