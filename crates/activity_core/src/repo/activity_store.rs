//! Activity store contract and shared error type.
//!
//! # Responsibility
//! - Define the storage capability set used by `ActivityService`.
//! - Keep storage errors semantic (`NotFound`, `DuplicateId`) next to
//!   transport errors.
//!
//! # Invariants
//! - `list()` returns an owned snapshot in insertion order.
//! - `update()` never changes the relative order of entries.
//! - Mutations that miss return `NotFound` and leave the store unchanged.

use crate::db::DbError;
use crate::model::activity::{Activity, ActivityId};
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for activity persistence and lookup operations.
#[derive(Debug)]
pub enum StoreError {
    /// Persisted row failed domain validation on read.
    Validation(ValidationError),
    Db(DbError),
    NotFound(ActivityId),
    DuplicateId(ActivityId),
    /// Connection schema is not at the version this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "{} not found: {id}", id.kind.as_str()),
            Self::DuplicateId(id) => write!(f, "{} already stored: {id}", id.kind.as_str()),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted activity data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage capability set for activities.
///
/// Implementations take `&self`; mutation goes through interior mutability
/// or the underlying connection.
pub trait ActivityStore {
    /// Appends an activity. Fails with `DuplicateId` when the id is taken.
    fn add(&self, activity: &Activity) -> StoreResult<()>;
    /// Removes the activity with `id`.
    fn remove(&self, id: ActivityId) -> StoreResult<()>;
    /// Replaces the entry with the same id, keeping its position.
    fn update(&self, activity: &Activity) -> StoreResult<()>;
    fn list(&self) -> StoreResult<Vec<Activity>>;
    fn find_by_id(&self, id: ActivityId) -> StoreResult<Option<Activity>>;
}

impl<S: ActivityStore + ?Sized> ActivityStore for &S {
    fn add(&self, activity: &Activity) -> StoreResult<()> {
        (**self).add(activity)
    }

    fn remove(&self, id: ActivityId) -> StoreResult<()> {
        (**self).remove(id)
    }

    fn update(&self, activity: &Activity) -> StoreResult<()> {
        (**self).update(activity)
    }

    fn list(&self) -> StoreResult<Vec<Activity>> {
        (**self).list()
    }

    fn find_by_id(&self, id: ActivityId) -> StoreResult<Option<Activity>> {
        (**self).find_by_id(id)
    }
}
