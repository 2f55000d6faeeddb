//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory catalog orders the museum through `RankingPolicy` directly, so
//! service tests exercise the reference ordering while the PostgreSQL adapter is
//! checked against the same policy in its ignored integration tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
