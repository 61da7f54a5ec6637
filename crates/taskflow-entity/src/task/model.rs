//! Task entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{TaskPriority, TaskStatus};

/// A unit of work inside a project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Workspace of the owning project (denormalized for access checks).
    pub workspace_id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Short title.
    pub title: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
    /// Assigned user, if any.
    pub assignee_id: Option<Uuid>,
    /// The user who created the task.
    pub created_by: Uuid,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Incremented on every update.
    pub version: i64,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Whether `user_id` created the task or is its assignee.
    pub fn is_owned_or_assigned_to(&self, user_id: Uuid) -> bool {
        self.created_by == user_id || self.assignee_id == Some(user_id)
    }

    /// Applies a partial update. Absent fields are left untouched.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee_id) = patch.assignee_id {
            self.assignee_id = Some(assignee_id);
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

/// Data required to create a task.
#[derive(Debug, Clone, Default)]
pub struct CreateTask {
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Status (defaults to `TODO`).
    pub status: Option<TaskStatus>,
    /// Priority (defaults to `MED`).
    pub priority: Option<TaskPriority>,
    /// Assignee.
    pub assignee_id: Option<Uuid>,
    /// Due date.
    pub due_date: Option<NaiveDate>,
}

impl CreateTask {
    /// Materializes the row that will be inserted.
    pub fn into_task(self, workspace_id: Uuid, project_id: Uuid, created_by: Uuid) -> Task {
        let now = Utc::now();
        Task {
            id: Uuid::new_v4(),
            workspace_id,
            project_id,
            title: self.title,
            description: self.description,
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            assignee_id: self.assignee_id,
            created_by,
            due_date: self.due_date,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a task.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<TaskStatus>,
    /// New priority.
    pub priority: Option<TaskPriority>,
    /// New assignee.
    pub assignee_id: Option<Uuid>,
    /// New due date.
    pub due_date: Option<NaiveDate>,
}
