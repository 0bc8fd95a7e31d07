//! File-backed activity store on top of SQLite.
//!
//! # Responsibility
//! - Persist activities in the `activities` table so `list()` survives
//!   process restarts.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - Insertion order is the `position` autoincrement column; `update` never
//!   touches it.
//! - Read paths re-validate rows and reject invalid data instead of masking it.

use crate::db::migrations::{current_user_version, latest_version};
use crate::model::activity::{Activity, ActivityId, ActivityKind};
use crate::model::event::Event;
use crate::model::task::{Task, TaskStatus};
use crate::repo::activity_store::{ActivityStore, StoreError, StoreResult};
use chrono::NaiveDate;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const ACTIVITY_SELECT_SQL: &str = "SELECT
    kind,
    number,
    created_on,
    description,
    status,
    location,
    occurs_on
FROM activities";

const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed `ActivityStore`.
pub struct SqliteActivityStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteActivityStore<'conn> {
    /// Wraps a connection returned by `db::open_db` / `db::open_db_in_memory`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }

    fn contains(&self, id: ActivityId) -> StoreResult<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM activities WHERE kind = ?1 AND number = ?2;",
                params![id.kind.as_str(), id.number],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

impl ActivityStore for SqliteActivityStore<'_> {
    fn add(&self, activity: &Activity) -> StoreResult<()> {
        let id = activity.id();
        if self.contains(id)? {
            return Err(StoreError::DuplicateId(id));
        }

        let columns = ActivityColumns::from(activity);
        self.conn.execute(
            "INSERT INTO activities (
                kind,
                number,
                created_on,
                description,
                status,
                location,
                occurs_on
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                id.kind.as_str(),
                id.number,
                columns.created_on,
                activity.description(),
                columns.status,
                columns.location,
                columns.occurs_on,
            ],
        )?;

        debug!(
            "event=store_add module=repo status=ok backend=sqlite kind={} id={}",
            id.kind.as_str(),
            id
        );
        Ok(())
    }

    fn remove(&self, id: ActivityId) -> StoreResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM activities WHERE kind = ?1 AND number = ?2;",
            params![id.kind.as_str(), id.number],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    fn update(&self, activity: &Activity) -> StoreResult<()> {
        let id = activity.id();
        let columns = ActivityColumns::from(activity);
        let changed = self.conn.execute(
            "UPDATE activities
             SET
                created_on = ?1,
                description = ?2,
                status = ?3,
                location = ?4,
                occurs_on = ?5
             WHERE kind = ?6 AND number = ?7;",
            params![
                columns.created_on,
                activity.description(),
                columns.status,
                columns.location,
                columns.occurs_on,
                id.kind.as_str(),
                id.number,
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<Activity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACTIVITY_SELECT_SQL} ORDER BY position ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut activities = Vec::new();

        while let Some(row) = rows.next()? {
            activities.push(parse_activity_row(row)?);
        }

        Ok(activities)
    }

    fn find_by_id(&self, id: ActivityId) -> StoreResult<Option<Activity>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ACTIVITY_SELECT_SQL}
             WHERE kind = ?1 AND number = ?2;"
        ))?;

        let mut rows = stmt.query(params![id.kind.as_str(), id.number])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_activity_row(row)?));
        }

        Ok(None)
    }
}

/// Variant-specific column values; unused columns are `NULL`.
struct ActivityColumns<'a> {
    created_on: String,
    status: Option<&'static str>,
    location: Option<&'a str>,
    occurs_on: Option<&'a str>,
}

impl<'a> From<&'a Activity> for ActivityColumns<'a> {
    fn from(activity: &'a Activity) -> Self {
        let created_on = activity.created_on().format(STORED_DATE_FORMAT).to_string();
        match activity {
            Activity::Task(task) => Self {
                created_on,
                status: Some(task.status().as_str()),
                location: None,
                occurs_on: None,
            },
            Activity::Event(event) => Self {
                created_on,
                status: None,
                location: Some(event.location()),
                occurs_on: Some(event.occurs_on()),
            },
        }
    }
}

fn parse_activity_row(row: &Row<'_>) -> StoreResult<Activity> {
    let kind_text: String = row.get("kind")?;
    let kind = ActivityKind::parse(&kind_text).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid kind `{kind_text}` in activities.kind"))
    })?;

    let number: u32 = row.get("number")?;
    let created_text: String = row.get("created_on")?;
    let created_on = NaiveDate::parse_from_str(&created_text, STORED_DATE_FORMAT).map_err(|_| {
        StoreError::InvalidData(format!(
            "invalid date `{created_text}` in activities.created_on"
        ))
    })?;
    let description: String = row.get("description")?;

    let activity = match kind {
        ActivityKind::Task => {
            let status_text: Option<String> = row.get("status")?;
            let status = status_text
                .as_deref()
                .and_then(TaskStatus::parse)
                .ok_or_else(|| {
                    StoreError::InvalidData(format!(
                        "invalid task status `{}` in activities.status",
                        status_text.as_deref().unwrap_or("NULL")
                    ))
                })?;
            Activity::Task(Task::restore(number, created_on, description, status)?)
        }
        ActivityKind::Event => {
            let location: Option<String> = row.get("location")?;
            let occurs_on: Option<String> = row.get("occurs_on")?;
            Activity::Event(Event::restore(
                number,
                created_on,
                description,
                location.unwrap_or_default(),
                occurs_on.unwrap_or_default(),
            )?)
        }
    };

    Ok(activity)
}
