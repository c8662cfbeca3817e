//! View model for the statistics screen.
//!
//! Turns the task-snapshot stream into five observable fields:
//!
//! | Field | Success(tasks) | Error |
//! |-------|----------------|-------|
//! | `active_tasks_percent` | computed | 0.0 |
//! | `completed_tasks_percent` | computed | 0.0 |
//! | `error` | false | true |
//! | `empty` | `tasks.is_empty()` | false |
//! | `data_loading` | independent, driven by [`StatisticsViewModel::refresh`] | |
//!
//! Background work (the observe loop and refreshes) is scoped by the view
//! model's [`CancellationToken`]; [`StatisticsViewModel::shutdown`] stops it.

use futures::StreamExt;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::observable::Observable;
use super::snapshot::StatisticsSnapshot;
use crate::config::StatisticsConfig;
use crate::domain::stats::{compute_stats, format_percent, StatsSummary};
use crate::error::TaskError;
use crate::models::{Outcome, Task};
use crate::traits::{ObserveTasks, RefreshTasks};

/// View model for the statistics screen.
///
/// Cheap to clone; clones share fields and the cancellation scope.
///
/// # Example
///
/// ```ignore
/// use taskstats::adapters::mock::InMemoryTaskSource;
/// use taskstats::view_state::StatisticsViewModel;
///
/// let view_model = StatisticsViewModel::from_source(InMemoryTaskSource::new());
/// let _sub = view_model
///     .active_tasks_percent()
///     .subscribe(|percent| println!("active: {percent}"));
///
/// view_model.start();
/// view_model.refresh().await?;
/// view_model.shutdown();
/// ```
#[derive(Clone)]
pub struct StatisticsViewModel {
    inner: Arc<Inner>,
}

struct Inner {
    observe_tasks: Arc<dyn ObserveTasks>,
    refresh_tasks: Arc<dyn RefreshTasks>,
    config: StatisticsConfig,
    cancel: CancellationToken,
    stats: Observable<Option<StatsSummary>>,
    active_tasks_percent: Observable<f32>,
    completed_tasks_percent: Observable<f32>,
    data_loading: Observable<bool>,
    error: Observable<bool>,
    empty: Observable<bool>,
    /// Refreshes started but not yet settled
    refreshes_in_flight: Mutex<usize>,
}

impl StatisticsViewModel {
    /// Create a view model.
    ///
    /// `cancel` scopes every background task this view model starts;
    /// cancelling it (directly or via [`shutdown`](Self::shutdown)) tears
    /// them down.
    pub fn new(
        observe_tasks: Arc<dyn ObserveTasks>,
        refresh_tasks: Arc<dyn RefreshTasks>,
        config: StatisticsConfig,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                observe_tasks,
                refresh_tasks,
                config,
                cancel,
                stats: Observable::new(None),
                active_tasks_percent: Observable::new(0.0),
                completed_tasks_percent: Observable::new(0.0),
                data_loading: Observable::new(false),
                error: Observable::new(false),
                empty: Observable::new(false),
                refreshes_in_flight: Mutex::new(0),
            }),
        }
    }

    /// Create a view model over one source that both observes and
    /// refreshes, with default config and a fresh cancellation token.
    pub fn from_source<S>(source: S) -> Self
    where
        S: ObserveTasks + RefreshTasks + 'static,
    {
        let source = Arc::new(source);
        Self::new(
            source.clone(),
            source,
            StatisticsConfig::default(),
            CancellationToken::new(),
        )
    }

    /// Active tasks as a percentage of all tasks; 0 when unavailable.
    pub fn active_tasks_percent(&self) -> &Observable<f32> {
        &self.inner.active_tasks_percent
    }

    /// Completed tasks as a percentage of all tasks; 0 when unavailable.
    pub fn completed_tasks_percent(&self) -> &Observable<f32> {
        &self.inner.completed_tasks_percent
    }

    /// True while at least one refresh is in flight.
    pub fn data_loading(&self) -> &Observable<bool> {
        &self.inner.data_loading
    }

    /// True when the latest snapshot was an error.
    pub fn error(&self) -> &Observable<bool> {
        &self.inner.error
    }

    /// True when the latest snapshot was an empty task list.
    pub fn empty(&self) -> &Observable<bool> {
        &self.inner.empty
    }

    /// Statistics for the latest successful snapshot, or `None` after an
    /// error or before the first snapshot.
    pub fn stats(&self) -> Option<StatsSummary> {
        self.inner.stats.get()
    }

    pub fn config(&self) -> &StatisticsConfig {
        &self.inner.config
    }

    /// Token scoping this view model's background work.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.inner.cancel
    }

    /// Active percentage formatted with the configured precision.
    pub fn active_tasks_label(&self) -> String {
        format_percent(
            self.inner.active_tasks_percent.get(),
            self.inner.config.display_precision,
        )
    }

    /// Completed percentage formatted with the configured precision.
    pub fn completed_tasks_label(&self) -> String {
        format_percent(
            self.inner.completed_tasks_percent.get(),
            self.inner.config.display_precision,
        )
    }

    /// Copy of all observable fields.
    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            active_tasks_percent: self.inner.active_tasks_percent.get(),
            completed_tasks_percent: self.inner.completed_tasks_percent.get(),
            data_loading: self.inner.data_loading.get(),
            error: self.inner.error.get(),
            empty: self.inner.empty.get(),
        }
    }

    /// Recompute every outcome-derived field from one snapshot.
    ///
    /// Listeners of changed fields are notified before this returns.
    pub fn apply_outcome(&self, outcome: &Outcome<Vec<Task>>) {
        match outcome {
            Outcome::Success(tasks) => debug!(tasks = tasks.len(), "Task snapshot received"),
            Outcome::Error(err) => debug!(
                code = err.error_code(),
                "Task snapshot unavailable: {}", err
            ),
        }

        let stats = outcome.success().map(|tasks| compute_stats(tasks));
        self.inner.stats.set(stats);
        self.inner
            .active_tasks_percent
            .set(stats.map_or(0.0, |s| s.active_tasks_percent));
        self.inner
            .completed_tasks_percent
            .set(stats.map_or(0.0, |s| s.completed_tasks_percent));
        self.inner.error.set(outcome.is_error());
        self.inner
            .empty
            .set(outcome.success().is_some_and(|tasks| tasks.is_empty()));
    }

    /// Apply task snapshots until cancelled or the source stream ends.
    ///
    /// Snapshots are applied one at a time in arrival order.
    pub async fn observe(&self) {
        let cancel = self.inner.cancel.child_token();
        let mut stream = self.inner.observe_tasks.observe_tasks();
        debug!("Observing tasks");

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Stopped observing tasks");
                    break;
                }
                next = stream.next() => match next {
                    Some(outcome) => self.apply_outcome(&outcome),
                    None => {
                        let err = TaskError::SourceClosed;
                        warn!(code = err.error_code(), "{}", err);
                        break;
                    }
                },
            }
        }
    }

    /// Spawn [`observe`](Self::observe) on the current tokio runtime.
    pub fn start(&self) -> JoinHandle<()> {
        let view_model = self.clone();
        tokio::spawn(async move { view_model.observe().await })
    }

    /// Re-fetch tasks in the background.
    ///
    /// `data_loading` becomes true before this returns and false once every
    /// in-flight refresh has settled, whether it succeeded, failed or was
    /// cancelled. Failures are logged and otherwise ignored; new statistics
    /// arrive through the observed stream.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, before `data_loading`
    /// is touched.
    pub fn refresh(&self) -> JoinHandle<()> {
        let runtime = Handle::current();
        self.begin_refresh();

        let inner = Arc::clone(&self.inner);
        let cancel = self.inner.cancel.child_token();
        runtime.spawn(async move {
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(TaskError::Cancelled),
                result = inner.refresh_tasks.refresh_tasks() => result,
            };
            match result {
                Ok(()) => info!("Task refresh finished"),
                Err(TaskError::Cancelled) => debug!(
                    code = TaskError::Cancelled.error_code(),
                    "Task refresh cancelled"
                ),
                Err(err) => warn!(
                    code = err.error_code(),
                    retryable = err.is_retryable(),
                    "Task refresh failed: {}", err
                ),
            }
            inner.end_refresh();
        })
    }

    /// Cancel all background work started by this view model.
    pub fn shutdown(&self) {
        if !self.inner.cancel.is_cancelled() {
            info!("Shutting down statistics view");
            self.inner.cancel.cancel();
        }
    }

    /// Check if [`shutdown`](Self::shutdown) has been called or the
    /// token was cancelled.
    pub fn is_shut_down(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    fn begin_refresh(&self) {
        let changed = {
            let mut in_flight = self
                .inner
                .refreshes_in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *in_flight += 1;
            info!(in_flight = *in_flight, "Refreshing tasks");
            self.inner.data_loading.replace(true)
        };
        // Listeners may call refresh() again, so they run after the
        // counter lock is released.
        if changed {
            self.inner.data_loading.notify(&true);
        }
    }
}

impl Inner {
    fn end_refresh(&self) {
        let changed = {
            let mut in_flight = self
                .refreshes_in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *in_flight = in_flight.saturating_sub(1);
            *in_flight == 0 && self.data_loading.replace(false)
        };
        if changed {
            self.data_loading.notify(&false);
        }
    }
}

impl std::fmt::Debug for StatisticsViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticsViewModel")
            .field("snapshot", &self.snapshot())
            .field("config", &self.inner.config)
            .field("shut_down", &self.is_shut_down())
            .finish()
    }
}
