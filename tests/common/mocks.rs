//! Mock implementations for test fixtures.
//!
//! Re-exports the in-memory source from `taskstats::adapters::mock` and adds
//! a scripted source for ordering tests.

pub use taskstats::adapters::mock::InMemoryTaskSource;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use taskstats::error::{TaskError, TaskResult};
use taskstats::models::{Outcome, Task};
use taskstats::traits::{ObserveTasks, RefreshTasks, TaskStream};

/// Source that replays a fixed list of snapshots to every subscriber and
/// then stays open without emitting.
#[derive(Clone, Default)]
pub struct ScriptedTaskSource {
    script: Vec<Outcome<Vec<Task>>>,
    refresh_error: Option<TaskError>,
    subscriptions: Arc<AtomicUsize>,
    refreshes: Arc<Mutex<Vec<TaskResult<()>>>>,
}

impl ScriptedTaskSource {
    pub fn new(script: Vec<Outcome<Vec<Task>>>) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    /// Make every refresh fail with `error`.
    pub fn with_refresh_error(mut self, error: TaskError) -> Self {
        self.refresh_error = Some(error);
        self
    }

    /// Number of `observe_tasks` calls.
    pub fn subscriptions(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    /// Results returned by refresh so far.
    pub fn refresh_results(&self) -> Vec<TaskResult<()>> {
        self.refreshes.lock().unwrap().clone()
    }
}

impl ObserveTasks for ScriptedTaskSource {
    fn observe_tasks(&self) -> TaskStream {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
        stream::iter(self.script.clone())
            .chain(stream::pending())
            .boxed()
    }
}

#[async_trait]
impl RefreshTasks for ScriptedTaskSource {
    async fn refresh_tasks(&self) -> TaskResult<()> {
        let result = match &self.refresh_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        };
        self.refreshes.lock().unwrap().push(result.clone());
        result
    }
}
