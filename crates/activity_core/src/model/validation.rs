//! Field validation rules shared by activity factories and input layers.
//!
//! # Responsibility
//! - Reject blank text fields before an activity is constructed.
//! - Check event dates against the literal `dd/mm/yyyy` shape.
//!
//! # Invariants
//! - Validation is purely syntactic; `31/02/2025` is accepted.
//! - Validators never allocate ids or touch storage.

use crate::model::activity::ActivityKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static OCCURS_ON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid occurs_on regex"));

/// Construction-time validation failure for activity fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Description is empty or whitespace only.
    BlankDescription,
    /// Event location is empty or whitespace only.
    BlankLocation,
    /// Event date does not match `dd/mm/yyyy`.
    InvalidOccursOn(String),
    /// The kind's `IdSequence` has already issued `u32::MAX`.
    IdsExhausted(ActivityKind),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankDescription => write!(f, "description cannot be empty"),
            Self::BlankLocation => write!(f, "location cannot be empty"),
            Self::InvalidOccursOn(value) => {
                write!(f, "invalid event date `{value}`; expected dd/mm/yyyy")
            }
            Self::IdsExhausted(kind) => {
                write!(f, "no {} numbers left to assign", kind.as_str())
            }
        }
    }
}

impl Error for ValidationError {}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::BlankDescription);
    }
    Ok(())
}

pub fn validate_location(location: &str) -> Result<(), ValidationError> {
    if location.trim().is_empty() {
        return Err(ValidationError::BlankLocation);
    }
    Ok(())
}

/// Checks the `dd/mm/yyyy` shape with ASCII digits only.
pub fn validate_occurs_on(occurs_on: &str) -> Result<(), ValidationError> {
    if !OCCURS_ON_RE.is_match(occurs_on) {
        return Err(ValidationError::InvalidOccursOn(occurs_on.to_string()));
    }
    Ok(())
}
