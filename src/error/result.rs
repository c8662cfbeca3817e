//! Result alias for task operations.

use super::task_error::TaskError;

/// Type alias for Results using [`TaskError`].
///
/// # Example
///
/// ```ignore
/// use taskstats::error::TaskResult;
///
/// async fn refresh_tasks(&self) -> TaskResult<()> {
///     self.sync().await?;
///     Ok(())
/// }
/// ```
pub type TaskResult<T> = Result<T, TaskError>;
