//! Event variant of `Activity`.
//!
//! # Invariants
//! - `location` is never blank.
//! - `occurs_on` matches `dd/mm/yyyy`; calendar validity is not checked.

use crate::model::activity::{ActivityId, ActivityKind, IdSequence, DATE_FORMAT};
use crate::model::validation::{
    validate_description, validate_location, validate_occurs_on, ValidationError,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Scheduled activity with a location and an occurrence date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    id: ActivityId,
    created_on: NaiveDate,
    description: String,
    location: String,
    occurs_on: String,
}

impl Event {
    /// Creates an event stamped with today's local date.
    ///
    /// # Errors
    /// - `BlankDescription`, `BlankLocation` or `InvalidOccursOn`, checked in
    ///   that order. No number is drawn from `ids` on failure.
    /// - `IdsExhausted` when `ids` has nothing left to issue.
    pub fn create(
        ids: &IdSequence,
        description: impl Into<String>,
        location: impl Into<String>,
        occurs_on: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        let location = location.into();
        let occurs_on = occurs_on.into();
        validate_fields(&description, &location, &occurs_on)?;

        let number = ids
            .next_number()
            .ok_or(ValidationError::IdsExhausted(ActivityKind::Event))?;

        Ok(Self {
            id: ActivityId::event(number),
            created_on: Local::now().date_naive(),
            description,
            location,
            occurs_on,
        })
    }

    /// Rebuilds a persisted event, re-applying field validation.
    pub(crate) fn restore(
        number: u32,
        created_on: NaiveDate,
        description: String,
        location: String,
        occurs_on: String,
    ) -> Result<Self, ValidationError> {
        validate_fields(&description, &location, &occurs_on)?;
        Ok(Self {
            id: ActivityId::event(number),
            created_on,
            description,
            location,
            occurs_on,
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

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn occurs_on(&self) -> &str {
        &self.occurs_on
    }

    /// `"{id} - {location} - {description}"`.
    pub fn detail(&self) -> String {
        format!("{} - {} - {}", self.id, self.location, self.description)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Event=[id: {}, creationDate: {}, description: {}, occursOn: {}, location: {}]",
            self.id,
            self.created_on.format(DATE_FORMAT),
            self.description,
            self.occurs_on,
            self.location
        )
    }
}

fn validate_fields(
    description: &str,
    location: &str,
    occurs_on: &str,
) -> Result<(), ValidationError> {
    validate_description(description)?;
    validate_location(location)?;
    validate_occurs_on(occurs_on)
}

#[cfg(test)]
mod tests {
    use super::Event;
    use crate::model::activity::{ActivityKind, IdSequence};
    use crate::model::validation::ValidationError;

    #[test]
    fn failed_validation_does_not_consume_an_id() {
        let ids = IdSequence::new();
        let err = Event::create(&ids, "Launch", "HQ", "2025-03-15").unwrap_err();
        assert_eq!(err, ValidationError::InvalidOccursOn("2025-03-15".to_string()));

        let event = Event::create(&ids, "Launch", "HQ", "15/03/2025").unwrap();
        assert_eq!(event.id().number, 1);
    }

    #[test]
    fn description_is_checked_before_location() {
        let ids = IdSequence::new();
        let err = Event::create(&ids, "", "", "bad").unwrap_err();
        assert_eq!(err, ValidationError::BlankDescription);

        let err = Event::create(&ids, "Launch", " ", "bad").unwrap_err();
        assert_eq!(err, ValidationError::BlankLocation);
    }

    #[test]
    fn field_errors_win_over_exhausted_ids() {
        let ids = IdSequence::starting_after(u32::MAX);
        let err = Event::create(&ids, "Launch", "HQ", "soon").unwrap_err();
        assert_eq!(err, ValidationError::InvalidOccursOn("soon".to_string()));

        let err = Event::create(&ids, "Launch", "HQ", "15/03/2025").unwrap_err();
        assert_eq!(err, ValidationError::IdsExhausted(ActivityKind::Event));
    }
}
