//! Observable view state for the statistics screen.
//!
//! The host screen never reads tasks directly. It subscribes to the fields
//! of a [`StatisticsViewModel`], which recomputes them whenever the task
//! source emits a new snapshot.
//!
//! ```text
//! ┌──────────────────┐  Outcome<Vec<Task>>  ┌─────────────────────┐
//! │   ObserveTasks   │ ───────────────────▶ │ StatisticsViewModel │
//! └──────────────────┘                      │  compute_stats()    │
//! ┌──────────────────┐  refresh_tasks()     │                     │
//! │   RefreshTasks   │ ◀─────────────────── │  refresh()          │
//! └──────────────────┘                      └──────────┬──────────┘
//!                                                      │ Observable<_>
//!                                                      ▼
//!                                           ┌─────────────────────┐
//!                                           │     host screen     │
//!                                           └─────────────────────┘
//! ```
//!
//! ## Components
//!
//! - [`Observable`]: Value holder with synchronous change listeners
//! - [`Subscription`]: Guard that removes a listener when dropped
//! - [`StatisticsViewModel`]: Derives the observable fields and runs refreshes
//! - [`StatisticsSnapshot`]: Serializable copy of all fields

mod observable;
mod snapshot;
mod statistics_view;

pub use observable::{Observable, Subscription};
pub use snapshot::StatisticsSnapshot;
pub use statistics_view::StatisticsViewModel;
