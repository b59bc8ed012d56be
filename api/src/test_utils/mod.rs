//! Test utilities
//!
//! Manual in-memory mock implementations of the repository ports plus test
//! fixtures. The in-memory repositories implement the same optimistic
//! `(id, version)` update check as the PostgreSQL adapters, so the
//! concurrency-conflict path is exercisable without a database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
