//! Task source errors.

use thiserror::Error;

/// Errors produced by task-list collaborators.
///
/// `Clone` so that a failed snapshot can be replayed to every subscriber of
/// an observation stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The task list could not be loaded
    #[error("Task list unavailable: {message}")]
    Unavailable { message: String },

    /// The refresh action failed
    #[error("Task refresh failed: {message}")]
    RefreshFailed { message: String },

    /// The operation was cancelled before it finished
    #[error("Operation cancelled")]
    Cancelled,

    /// The observation source stopped producing snapshots
    #[error("Task source closed")]
    SourceClosed,
}

impl TaskError {
    /// Shorthand for [`TaskError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        TaskError::Unavailable {
            message: message.into(),
        }
    }

    /// Shorthand for [`TaskError::RefreshFailed`].
    pub fn refresh_failed(message: impl Into<String>) -> Self {
        TaskError::RefreshFailed {
            message: message.into(),
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TaskError::Unavailable { .. } => "TASKS_UNAVAILABLE",
            TaskError::RefreshFailed { .. } => "TASKS_REFRESH_FAILED",
            TaskError::Cancelled => "TASKS_CANCELLED",
            TaskError::SourceClosed => "TASKS_SOURCE_CLOSED",
        }
    }

    /// Whether trying the same operation again might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TaskError::Unavailable { .. } | TaskError::RefreshFailed { .. }
        )
    }
}
