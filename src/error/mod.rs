//! Error types for task-list access.
//!
//! Only one kind of failure reaches the statistics view: the task list could
//! not be obtained. It arrives wrapped in [`Outcome::Error`] and is shown to
//! the host as a boolean flag; the cause itself is only logged.
//!
//! Refresh failures are reported by collaborators as [`TaskError`] too, but
//! the view model swallows them after clearing its loading flag.
//!
//! [`Outcome::Error`]: crate::models::Outcome::Error

mod result;
mod task_error;

pub use result::TaskResult;
pub use task_error::TaskError;
