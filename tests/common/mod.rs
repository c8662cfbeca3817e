//! Common test utilities for integration tests.
//!
//! Provides task fixtures, a view model builder and small async helpers.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::{Arc, Mutex};
use std::time::Duration;
use taskstats::config::StatisticsConfig;
use taskstats::models::Task;
use taskstats::traits::{ObserveTasks, RefreshTasks};
use taskstats::view_state::StatisticsViewModel;
use tokio_util::sync::CancellationToken;

/// Tolerance for percentage comparisons.
pub const EPSILON: f32 = 0.01;

/// An active task with the given title.
pub fn active_task(title: &str) -> Task {
    Task::new(title, format!("{} description", title))
}

/// A completed task with the given title.
pub fn completed_task(title: &str) -> Task {
    active_task(title).completed(true)
}

/// Build a list from completed flags, in order.
pub fn tasks_from_flags(completed: &[bool]) -> Vec<Task> {
    completed
        .iter()
        .enumerate()
        .map(|(i, done)| active_task(&format!("Task {}", i)).completed(*done))
        .collect()
}

/// Builder for view models under test.
pub struct TestViewModelBuilder {
    config: StatisticsConfig,
    cancel: CancellationToken,
}

impl TestViewModelBuilder {
    pub fn new() -> Self {
        Self {
            config: StatisticsConfig::default(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_config(mut self, config: StatisticsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn build<S>(self, source: S) -> StatisticsViewModel
    where
        S: ObserveTasks + RefreshTasks + 'static,
    {
        let source = Arc::new(source);
        StatisticsViewModel::new(source.clone(), source, self.config, self.cancel)
    }
}

impl Default for TestViewModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Poll `condition` until it holds, failing the test after two seconds.
pub async fn wait_until<F: Fn() -> bool>(condition: F) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

/// Shared vector plus a listener that appends every value it sees.
pub fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |value: &T| sink.lock().unwrap().push(value.clone()))
}
