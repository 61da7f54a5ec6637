//! Optional criteria for narrowing a workspace task listing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Task;
use super::status::{TaskPriority, TaskStatus};

/// Criteria combined with AND. Absent fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Exact status.
    pub status: Option<TaskStatus>,
    /// Exact priority.
    pub priority: Option<TaskPriority>,
    /// Exact assignee.
    pub assignee_id: Option<Uuid>,
    /// Case-insensitive substring of title or description.
    pub q: Option<String>,
}

impl TaskFilter {
    /// The trimmed, lowercased search term, or `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `task` satisfies every present criterion.
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|s| s != task.status) {
            return false;
        }
        if self.priority.is_some_and(|p| p != task.priority) {
            return false;
        }
        if self.assignee_id.is_some() && self.assignee_id != task.assignee_id {
            return false;
        }
        match self.search_term() {
            Some(needle) => {
                task.title.to_lowercase().contains(&needle)
                    || task
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            }
            None => true,
        }
    }
}
