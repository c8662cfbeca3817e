//! Domain logic for the statistics screen.
//!
//! - [`compute_stats`] - Active/completed percentages for a task list
//! - [`count_tasks`] - Raw active/completed counts

pub mod stats;

pub use stats::{compute_stats, count_tasks, StatsSummary, TaskCounts};
