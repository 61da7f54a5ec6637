//! Comment service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use taskflow_auth::{AccessControl, WorkspaceAction};
use taskflow_core::error::AppError;
use taskflow_database::{CommentStore, TaskStore};
use taskflow_entity::comment::Comment;
use taskflow_entity::task::Task;

use crate::context::RequestContext;

/// Adds and lists comments on tasks.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    tasks: Arc<dyn TaskStore>,
    access: AccessControl,
}

impl std::fmt::Debug for CommentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentService").finish_non_exhaustive()
    }
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(
        comments: Arc<dyn CommentStore>,
        tasks: Arc<dyn TaskStore>,
        access: AccessControl,
    ) -> Self {
        Self {
            comments,
            tasks,
            access,
        }
    }

    /// Comment on a task. OWNER, ADMIN, and MEMBER only.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
        body: &str,
    ) -> Result<Comment, AppError> {
        let task = self.load_task(task_id).await?;
        self.access
            .authorize(task.workspace_id, ctx.user_id, WorkspaceAction::AddComment)
            .await?;

        if body.trim().is_empty() {
            return Err(AppError::validation("Comment body is required"));
        }

        let comment = Comment::new(task.id, task.workspace_id, ctx.user_id, body.to_string());
        self.comments.create(&comment).await?;

        info!(comment_id = %comment.id, task_id = %task.id, "Comment added");
        Ok(comment)
    }

    /// Comments on a task, oldest first.
    pub async fn list_comments(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
    ) -> Result<Vec<Comment>, AppError> {
        let task = self.load_task(task_id).await?;
        self.access
            .authorize(task.workspace_id, ctx.user_id, WorkspaceAction::ViewComment)
            .await?;
        self.comments.find_by_task(task.id).await
    }

    async fn load_task(&self, task_id: Uuid) -> Result<Task, AppError> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))
    }
}
