//! Point-in-time copy of the statistics view.

use serde::Serialize;

use crate::domain::stats::format_percent;

/// All observable fields of the statistics view at one moment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    /// Active tasks percentage (0 when no stats are available)
    pub active_tasks_percent: f32,
    /// Completed tasks percentage (0 when no stats are available)
    pub completed_tasks_percent: f32,
    /// Whether a refresh is in flight
    pub data_loading: bool,
    /// Whether the latest task snapshot was an error
    pub error: bool,
    /// Whether the latest task snapshot was an empty list
    pub empty: bool,
}

impl StatisticsSnapshot {
    /// Formatted active percentage
    pub fn active_display(&self, precision: usize) -> String {
        format_percent(self.active_tasks_percent, precision)
    }

    /// Formatted completed percentage
    pub fn completed_display(&self, precision: usize) -> String {
        format_percent(self.completed_tasks_percent, precision)
    }

    /// Serialize to a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
