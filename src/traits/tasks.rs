//! Task source trait abstractions.
//!
//! The statistics view never owns tasks. It reads snapshots through
//! [`ObserveTasks`] and asks for fresh data through [`RefreshTasks`], which
//! lets production repositories and test doubles be swapped freely.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::TaskResult;
use crate::models::{Outcome, Task};

/// Stream of task-list snapshots.
pub type TaskStream = BoxStream<'static, Outcome<Vec<Task>>>;

/// Source of continuously updating task-list snapshots.
///
/// # Example
///
/// ```ignore
/// use futures::StreamExt;
/// use taskstats::traits::ObserveTasks;
///
/// async fn print_counts<S: ObserveTasks>(source: &S) {
///     let mut stream = source.observe_tasks();
///     while let Some(outcome) = stream.next().await {
///         if let Some(tasks) = outcome.success() {
///             println!("{} tasks", tasks.len());
///         }
///     }
/// }
/// ```
pub trait ObserveTasks: Send + Sync {
    /// Subscribe to task-list snapshots.
    ///
    /// Every call starts a fresh subscription. The stream is lazy, should
    /// deliver the current snapshot first and then one item per change, and
    /// does not end while the source is alive. Failures are emitted as
    /// [`Outcome::Error`] items rather than ending the stream.
    fn observe_tasks(&self) -> TaskStream;
}

/// Action that re-fetches the task list.
#[async_trait]
pub trait RefreshTasks: Send + Sync {
    /// Re-fetch tasks.
    ///
    /// Completion does not carry data. A successful refresh is expected to
    /// make the matching [`ObserveTasks`] source emit a new snapshot.
    ///
    /// # Returns
    /// Ok(()) when the refresh finished, or an error if it failed
    async fn refresh_tasks(&self) -> TaskResult<()>;
}
