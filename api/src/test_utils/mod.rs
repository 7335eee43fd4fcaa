//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the port is a single async method, and a
//! scripted in-memory client keeps assertions on requested URLs explicit.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
