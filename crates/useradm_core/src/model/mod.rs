//! Domain model for the user registry.
//!
//! # Responsibility
//! - Define the canonical record shape shared by storage and CLI layers.
//! - Keep field-level validation next to the data it guards.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `UserId`.
//! - `username` and `email` are unique across the whole registry.

pub mod user;
