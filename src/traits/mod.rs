//! Trait abstractions for the collaborators of the statistics view.
//!
//! # Traits
//!
//! - [`ObserveTasks`] - Stream of task-list snapshots
//! - [`RefreshTasks`] - Asynchronous re-fetch of the task list

pub mod tasks;

pub use tasks::{ObserveTasks, RefreshTasks, TaskStream};
