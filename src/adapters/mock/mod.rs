//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`InMemoryTaskSource`] - Task source with local/remote snapshots and
//!   controllable refresh

pub mod tasks;

pub use tasks::InMemoryTaskSource;
