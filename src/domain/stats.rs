//! Active/completed statistics for a task list.
//!
//! [`compute_stats`] is a total function: every slice of tasks, including an
//! empty one, maps to a [`StatsSummary`] whose percentages lie in `[0, 100]`.

use serde::Serialize;

use crate::models::Task;

/// Number of active and completed tasks in a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub active: usize,
    pub completed: usize,
}

impl TaskCounts {
    /// Total number of tasks counted
    pub fn total(&self) -> usize {
        self.active + self.completed
    }
}

/// Percentage of active and completed tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Active tasks as a percentage of all tasks (0-100)
    pub active_tasks_percent: f32,
    /// Completed tasks as a percentage of all tasks (0-100)
    pub completed_tasks_percent: f32,
}

impl StatsSummary {
    pub fn new(active_tasks_percent: f32, completed_tasks_percent: f32) -> Self {
        Self {
            active_tasks_percent,
            completed_tasks_percent,
        }
    }

    /// Formatted active percentage (e.g., "66.7%")
    pub fn active_display(&self, precision: usize) -> String {
        format_percent(self.active_tasks_percent, precision)
    }

    /// Formatted completed percentage (e.g., "33.3%")
    pub fn completed_display(&self, precision: usize) -> String {
        format_percent(self.completed_tasks_percent, precision)
    }
}

pub(crate) fn format_percent(value: f32, precision: usize) -> String {
    format!("{:.*}%", precision, value)
}

/// Count active and completed tasks.
pub fn count_tasks(tasks: &[Task]) -> TaskCounts {
    let active = tasks.iter().filter(|task| task.is_active()).count();
    TaskCounts {
        active,
        completed: tasks.len() - active,
    }
}

/// Compute the active/completed split of `tasks`.
///
/// Returns `{0.0, 0.0}` for an empty list.
pub fn compute_stats(tasks: &[Task]) -> StatsSummary {
    let counts = count_tasks(tasks);
    let total = counts.total();
    if total == 0 {
        return StatsSummary::default();
    }

    let total = total as f32;
    StatsSummary {
        active_tasks_percent: 100.0 * counts.active as f32 / total,
        completed_tasks_percent: 100.0 * counts.completed as f32 / total,
    }
}
