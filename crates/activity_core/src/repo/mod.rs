//! Activity store abstraction and its implementations.
//!
//! # Responsibility
//! - Define the storage contract consumed by the service layer.
//! - Provide an in-memory store and a SQLite file-backed store.
//!
//! # Invariants
//! - Both stores satisfy the same observable contract; tests run against
//!   either.

pub mod activity_store;
pub mod memory_store;
pub mod sqlite_store;
