//! SQLite file behind `SqliteActivityStore`.
//!
//! # Responsibility
//! - Open activity database files (or in-memory databases for tests) with
//!   the `activities` table ready to use.
//! - Refuse files whose schema was written by a newer build.
//!
//! # Invariants
//! - The schema version lives in `PRAGMA user_version`; `0` means a fresh file.
//! - `SqliteActivityStore::try_new` only accepts connections at
//!   `migrations::latest_version()`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or upgrading an activity database.
#[derive(Debug)]
pub enum DbError {
    /// SQLite refused to open, configure or migrate the file.
    Sqlite(rusqlite::Error),
    /// The file's `user_version` is ahead of every migration this build knows.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "activity database error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "activity database uses schema v{db_version}, but this build only reads up to v{latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

#[cfg(test)]
mod tests {
    use super::DbError;

    #[test]
    fn schema_mismatch_names_both_versions() {
        let err = DbError::UnsupportedSchemaVersion {
            db_version: 4,
            latest_supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "activity database uses schema v4, but this build only reads up to v1"
        );
    }
}
