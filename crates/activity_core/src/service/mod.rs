//! Activity use-case service.
//!
//! # Responsibility
//! - Construct activities through model factories and persist them.
//! - Keep console callers decoupled from storage details and from the
//!   concrete service through `ActivityUseCases`.

pub mod activity_service;
pub mod use_cases;
