//! Taskstats - active/completed statistics for a to-do list
//!
//! Observes a task source, derives the share of active and completed tasks
//! and exposes the result as observable fields for a host screen.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod view_state;

pub use config::StatisticsConfig;
pub use domain::{compute_stats, StatsSummary};
pub use error::{TaskError, TaskResult};
pub use models::{Outcome, Task};
pub use view_state::{Observable, StatisticsSnapshot, StatisticsViewModel, Subscription};
