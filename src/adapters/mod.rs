//! Implementations of the traits in `crate::traits`.
//!
//! Production task repositories live with the host application; this crate
//! only ships test doubles.
//!
//! # Mock Implementations
//!
//! - [`mock::InMemoryTaskSource`] - In-memory task source

pub mod mock;

pub use mock::InMemoryTaskSource;
