//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A comment on a task.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The task commented on.
    pub task_id: Uuid,
    /// Workspace of the task (denormalized for access checks).
    pub workspace_id: Uuid,
    /// The commenting user.
    pub author_id: Uuid,
    /// Comment text.
    pub body: String,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Builds a new comment.
    pub fn new(task_id: Uuid, workspace_id: Uuid, author_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            workspace_id,
            author_id,
            body,
            created_at: Utc::now(),
        }
    }
}
