//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for user records.
//! - Isolate SQLite query details from service/CLI orchestration.
//!
//! # Invariants
//! - Repository writes must validate records before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `UniqueViolation`)
//!   in addition to DB transport errors.

pub mod user_repo;
