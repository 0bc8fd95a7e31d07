//! Use-case boundary consumed by input layers.
//!
//! # Responsibility
//! - Name the operations a front end may invoke without tying it to a
//!   concrete service or store.
//!
//! # Invariants
//! - Implementations persist on create, like `ActivityService`.
//! - Rejected input is reported as `ServiceError::Validation` so callers can
//!   collect it again.

use crate::model::activity::Activity;
use crate::model::task::Task;
use crate::service::activity_service::{ServiceResult, TaskFilter};

/// Operations behind the console menu.
pub trait ActivityUseCases {
    /// Creates and stores an open task.
    fn create_task(&self, description: String) -> ServiceResult<Activity>;

    /// Creates and stores an event.
    fn create_event(
        &self,
        description: String,
        location: String,
        occurs_on: String,
    ) -> ServiceResult<Activity>;

    /// Every stored activity in insertion order.
    fn list_activities(&self) -> ServiceResult<Vec<Activity>>;

    /// Stored tasks matching `filter`, in insertion order.
    fn list_tasks(&self, filter: TaskFilter) -> ServiceResult<Vec<Task>>;
}
