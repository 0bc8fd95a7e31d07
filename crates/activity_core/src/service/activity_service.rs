//! Activity use-case service.
//!
//! # Responsibility
//! - Own one `IdSequence` per activity kind.
//! - Create, list, update and remove activities through an `ActivityStore`.
//!
//! # Invariants
//! - Creation persists; a returned activity is already in the store.
//! - Validation errors reach the caller unchanged; an exhausted id sequence
//!   is reported as `ServiceError::IdsExhausted`, never wrapped around.
//! - The service depends on the `ActivityStore` trait only.

use crate::model::activity::{Activity, ActivityId, ActivityKind, IdSequence};
use crate::model::event::Event;
use crate::model::task::{Task, TaskStatus};
use crate::model::validation::ValidationError;
use crate::repo::activity_store::{ActivityStore, StoreError};
use crate::service::use_cases::ActivityUseCases;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for activity use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input rejected by model validation.
    Validation(ValidationError),
    /// Target activity does not exist.
    NotFound(ActivityId),
    /// Operation requires a task but the id names an event.
    NotATask(ActivityId),
    /// Every number of the kind's sequence has been issued.
    IdsExhausted(ActivityKind),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "{} not found: {id}", id.kind.as_str()),
            Self::NotATask(id) => write!(f, "activity {id} is not a task"),
            Self::IdsExhausted(kind) => {
                write!(f, "cannot create {}: every id has been used", kind.as_str())
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        match value {
            ValidationError::IdsExhausted(kind) => Self::IdsExhausted(kind),
            other => Self::Validation(other),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Task status selection for filtered listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    Open,
    Closed,
    Both,
}

impl TaskFilter {
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::Open => status == TaskStatus::Open,
            Self::Closed => status == TaskStatus::Closed,
            Self::Both => true,
        }
    }
}

/// Use-case façade over an activity store.
pub struct ActivityService<S: ActivityStore> {
    store: S,
    task_ids: IdSequence,
    event_ids: IdSequence,
}

impl<S: ActivityStore> ActivityService<S> {
    /// Creates a service whose task and event numbering both start at 1.
    pub fn new(store: S) -> Self {
        Self {
            store,
            task_ids: IdSequence::new(),
            event_ids: IdSequence::new(),
        }
    }

    /// Creates a service that continues numbering after the highest stored
    /// task and event numbers.
    pub fn resume(store: S) -> ServiceResult<Self> {
        let mut last_task = 0;
        let mut last_event = 0;
        for activity in store.list()? {
            let id = activity.id();
            match id.kind {
                ActivityKind::Task => last_task = last_task.max(id.number),
                ActivityKind::Event => last_event = last_event.max(id.number),
            }
        }

        info!(
            "event=service_resume module=service status=ok last_task={} last_event={}",
            last_task, last_event
        );
        Ok(Self {
            store,
            task_ids: IdSequence::starting_after(last_task),
            event_ids: IdSequence::starting_after(last_event),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates and stores an open task.
    pub fn create_task(&self, description: impl Into<String>) -> ServiceResult<Activity> {
        let task = Task::create(&self.task_ids, description).inspect_err(|err| {
            warn!("event=activity_create module=service status=rejected kind=task reason=\"{err}\"");
        })?;
        self.persist(Activity::Task(task))
    }

    /// Creates and stores an event.
    pub fn create_event(
        &self,
        description: impl Into<String>,
        location: impl Into<String>,
        occurs_on: impl Into<String>,
    ) -> ServiceResult<Activity> {
        let event = Event::create(&self.event_ids, description, location, occurs_on)
            .inspect_err(|err| {
                warn!(
                    "event=activity_create module=service status=rejected kind=event reason=\"{err}\""
                );
            })?;
        self.persist(Activity::Event(event))
    }

    /// Lists every stored activity in insertion order.
    pub fn list_activities(&self) -> ServiceResult<Vec<Activity>> {
        Ok(self.store.list()?)
    }

    /// Lists tasks whose status matches `filter`, in insertion order.
    pub fn list_tasks(&self, filter: TaskFilter) -> ServiceResult<Vec<Task>> {
        Ok(self
            .store
            .list()?
            .into_iter()
            .filter_map(|activity| match activity {
                Activity::Task(task) if filter.matches(task.status()) => Some(task),
                _ => None,
            })
            .collect())
    }

    pub fn find_activity(&self, id: ActivityId) -> ServiceResult<Option<Activity>> {
        Ok(self.store.find_by_id(id)?)
    }

    /// Sets the status of a stored task and returns the updated task.
    ///
    /// # Errors
    /// - `NotATask` when `id` names an event.
    /// - `NotFound` when no activity has `id`.
    pub fn set_task_status(&self, id: ActivityId, status: TaskStatus) -> ServiceResult<Task> {
        if id.kind != ActivityKind::Task {
            return Err(ServiceError::NotATask(id));
        }
        let mut task = match self.store.find_by_id(id)? {
            Some(Activity::Task(task)) => task,
            Some(Activity::Event(_)) => return Err(ServiceError::NotATask(id)),
            None => return Err(ServiceError::NotFound(id)),
        };

        task.set_status(status);
        self.store.update(&Activity::Task(task.clone()))?;
        info!(
            "event=task_status module=service status=ok id={} task_status={}",
            id, status
        );
        Ok(task)
    }

    pub fn remove_activity(&self, id: ActivityId) -> ServiceResult<()> {
        self.store.remove(id)?;
        info!(
            "event=activity_remove module=service status=ok kind={} id={}",
            id.kind.as_str(),
            id
        );
        Ok(())
    }

    fn persist(&self, activity: Activity) -> ServiceResult<Activity> {
        let id = activity.id();
        if let Err(err) = self.store.add(&activity) {
            warn!(
                "event=activity_create module=service status=error kind={} id={} error={}",
                id.kind.as_str(),
                id,
                err
            );
            return Err(err.into());
        }

        info!(
            "event=activity_create module=service status=ok kind={} id={}",
            id.kind.as_str(),
            id
        );
        Ok(activity)
    }
}

impl<S: ActivityStore> ActivityUseCases for ActivityService<S> {
    fn create_task(&self, description: String) -> ServiceResult<Activity> {
        ActivityService::create_task(self, description)
    }

    fn create_event(
        &self,
        description: String,
        location: String,
        occurs_on: String,
    ) -> ServiceResult<Activity> {
        ActivityService::create_event(self, description, location, occurs_on)
    }

    fn list_activities(&self) -> ServiceResult<Vec<Activity>> {
        ActivityService::list_activities(self)
    }

    fn list_tasks(&self, filter: TaskFilter) -> ServiceResult<Vec<Task>> {
        ActivityService::list_tasks(self, filter)
    }
}
