use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item as delivered by the task source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier (random UUID unless the source supplies one)
    #[serde(default = "new_task_id")]
    pub id: String,
    /// Short title shown in lists
    #[serde(default)]
    pub title: String,
    /// Longer free-form description
    #[serde(default)]
    pub description: String,
    /// Whether the task has been completed
    #[serde(default, alias = "is_completed")]
    pub completed: bool,
}

fn new_task_id() -> String {
    Uuid::new_v4().to_string()
}

impl Task {
    /// Create a new active task with a generated ID
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: new_task_id(),
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Create a task with an explicit ID
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    /// Builder-style setter for the completed flag
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// A task is active while it is not completed
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
