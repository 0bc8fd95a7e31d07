//! Core domain logic for the activity tracker.
//! This crate is the single source of truth for activity invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{Activity, ActivityId, ActivityKind, IdSequence, DATE_FORMAT};
pub use model::event::Event;
pub use model::task::{Task, TaskStatus};
pub use model::validation::{
    validate_description, validate_location, validate_occurs_on, ValidationError,
};
pub use repo::activity_store::{ActivityStore, StoreError, StoreResult};
pub use repo::memory_store::MemoryActivityStore;
pub use repo::sqlite_store::SqliteActivityStore;
pub use service::activity_service::{ActivityService, ServiceError, ServiceResult, TaskFilter};
pub use service::use_cases::ActivityUseCases;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
