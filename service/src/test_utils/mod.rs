//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory adapters double as working repositories, so the only mock
//! needed here is a store that always fails.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
