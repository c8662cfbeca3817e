//! In-memory task source for testing.
//!
//! Models a repository with a local snapshot (what observers see) and a
//! remote copy (what a refresh fetches). Writing to the local side emits to
//! every observer immediately; writing to the remote side only becomes
//! visible after [`RefreshTasks::refresh_tasks`] copies it across.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::{TaskError, TaskResult};
use crate::models::{Outcome, Task};
use crate::traits::{ObserveTasks, RefreshTasks, TaskStream};

/// In-memory task source implementing both collaborator traits.
///
/// Clones share the same state. Observation streams end once every clone
/// has been dropped.
///
/// # Example
///
/// ```ignore
/// use taskstats::adapters::mock::InMemoryTaskSource;
/// use taskstats::models::Task;
///
/// let source = InMemoryTaskSource::new();
///
/// // Visible to observers right away
/// source.add_task(Task::new("Buy milk", ""));
///
/// // Only visible after a refresh
/// source.set_remote_tasks(vec![Task::new("Call mum", "").completed(true)]);
/// source.refresh_tasks().await?;
/// assert_eq!(source.refresh_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryTaskSource {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Snapshot delivered to observers
    local_tx: watch::Sender<Outcome<Vec<Task>>>,
    /// Snapshot a refresh will publish
    remote_tx: watch::Sender<Outcome<Vec<Task>>>,
    /// Refresh blocks while this is true
    paused_tx: watch::Sender<bool>,
    /// Whether refresh should fail
    refresh_should_fail: AtomicBool,
    /// Number of refresh calls started
    refresh_calls: AtomicUsize,
}

impl InMemoryTaskSource {
    /// Create a source with an empty task list.
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Create a source whose local and remote lists both start as `tasks`.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let (local_tx, _) = watch::channel(Outcome::Success(tasks.clone()));
        let (remote_tx, _) = watch::channel(Outcome::Success(tasks));
        let (paused_tx, _) = watch::channel(false);

        Self {
            inner: Arc::new(Inner {
                local_tx,
                remote_tx,
                paused_tx,
                refresh_should_fail: AtomicBool::new(false),
                refresh_calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Replace the task list on both sides and notify observers.
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        self.inner
            .remote_tx
            .send_replace(Outcome::Success(tasks.clone()));
        self.inner.local_tx.send_replace(Outcome::Success(tasks));
    }

    /// Append a task on both sides and notify observers.
    ///
    /// If the local snapshot is an error it is replaced by a list holding
    /// only `task`.
    pub fn add_task(&self, task: Task) {
        let push = |outcome: &mut Outcome<Vec<Task>>| match outcome {
            Outcome::Success(tasks) => tasks.push(task.clone()),
            Outcome::Error(_) => *outcome = Outcome::Success(vec![task.clone()]),
        };
        self.inner.remote_tx.send_modify(push);
        self.inner.local_tx.send_modify(push);
    }

    /// Emit an error snapshot to observers.
    pub fn set_error(&self, error: TaskError) {
        self.inner.local_tx.send_replace(Outcome::Error(error));
    }

    /// Change what the next refresh will publish, without notifying.
    pub fn set_remote_tasks(&self, tasks: Vec<Task>) {
        self.inner.remote_tx.send_replace(Outcome::Success(tasks));
    }

    /// Make the next refresh publish an error snapshot.
    pub fn set_remote_error(&self, error: TaskError) {
        self.inner.remote_tx.send_replace(Outcome::Error(error));
    }

    /// Configure whether refresh should fail.
    ///
    /// A failing refresh publishes nothing.
    pub fn set_refresh_should_fail(&self, should_fail: bool) {
        self.inner
            .refresh_should_fail
            .store(should_fail, Ordering::SeqCst);
    }

    /// Hold every refresh at its start until [`resume_refresh`] is called.
    ///
    /// [`resume_refresh`]: Self::resume_refresh
    pub fn pause_refresh(&self) {
        self.inner.paused_tx.send_replace(true);
    }

    /// Let paused refreshes continue.
    pub fn resume_refresh(&self) {
        self.inner.paused_tx.send_replace(false);
    }

    /// Number of refresh calls started so far.
    pub fn refresh_count(&self) -> usize {
        self.inner.refresh_calls.load(Ordering::SeqCst)
    }

    /// Current local snapshot.
    pub fn current(&self) -> Outcome<Vec<Task>> {
        self.inner.local_tx.borrow().clone()
    }

    /// Number of live observation streams.
    pub fn observer_count(&self) -> usize {
        self.inner.local_tx.receiver_count()
    }
}

impl Default for InMemoryTaskSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ObserveTasks for InMemoryTaskSource {
    fn observe_tasks(&self) -> TaskStream {
        let rx = self.inner.local_tx.subscribe();

        // The first item is the current snapshot, later items follow changes.
        stream::unfold((rx, true), |(mut rx, first)| async move {
            if !first && rx.changed().await.is_err() {
                return None;
            }
            let outcome = rx.borrow_and_update().clone();
            Some((outcome, (rx, false)))
        })
        .boxed()
    }
}

#[async_trait]
impl RefreshTasks for InMemoryTaskSource {
    async fn refresh_tasks(&self) -> TaskResult<()> {
        self.inner.refresh_calls.fetch_add(1, Ordering::SeqCst);

        let mut paused = self.inner.paused_tx.subscribe();
        paused
            .wait_for(|paused| !*paused)
            .await
            .map_err(|_| TaskError::SourceClosed)?;

        if self.inner.refresh_should_fail.load(Ordering::SeqCst) {
            return Err(TaskError::refresh_failed("Mock refresh failure"));
        }

        let remote = self.inner.remote_tx.borrow().clone();
        self.inner.local_tx.send_replace(remote);
        Ok(())
    }
}
