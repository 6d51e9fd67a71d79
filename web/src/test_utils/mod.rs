//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Adapter and handler tests talk to a `mockito` server instead of the mock.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
