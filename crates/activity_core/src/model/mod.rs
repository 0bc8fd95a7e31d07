//! Activity domain model.
//!
//! # Responsibility
//! - Define Task and Event as the two variants of `Activity`.
//! - Own identity assignment and field validation.
//!
//! # Invariants
//! - Activities are created only through `Task::create` / `Event::create`.
//! - Ids come from caller-owned `IdSequence` values, one per variant.

pub mod activity;
pub mod event;
pub mod task;
pub mod validation;
