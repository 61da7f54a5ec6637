//! Task service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use taskflow_auth::{ResourceGuards, WorkspaceAction};
use taskflow_core::error::AppError;
use taskflow_database::{ProjectStore, TaskStore};
use taskflow_entity::task::{CreateTask, Task, TaskFilter, TaskPatch};

use crate::context::RequestContext;

const TASK_NOT_FOUND: &str = "Task not found";

/// Task CRUD. The resource is looked up before the caller's role is checked.
#[derive(Clone)]
pub struct TaskService {
    projects: Arc<dyn ProjectStore>,
    tasks: Arc<dyn TaskStore>,
    guards: ResourceGuards,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService").finish_non_exhaustive()
    }
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(
        projects: Arc<dyn ProjectStore>,
        tasks: Arc<dyn TaskStore>,
        guards: ResourceGuards,
    ) -> Self {
        Self {
            projects,
            tasks,
            guards,
        }
    }

    /// Create a task in a project. OWNER, ADMIN, and MEMBER only.
    pub async fn create_task(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        req: CreateTask,
    ) -> Result<Task, AppError> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        self.guards
            .access()
            .authorize(project.workspace_id, ctx.user_id, WorkspaceAction::CreateTask)
            .await?;

        if req.title.trim().is_empty() {
            return Err(AppError::validation("Task title is required"));
        }

        let task = req.into_task(project.workspace_id, project.id, ctx.user_id);
        self.tasks.create(&task).await?;

        info!(
            task_id = %task.id,
            project_id = %project.id,
            user_id = %ctx.user_id,
            "Task created"
        );
        Ok(task)
    }

    /// Tasks of a workspace matching `filter`, newest first.
    pub async fn list_tasks(
        &self,
        ctx: &RequestContext,
        workspace_id: Uuid,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, AppError> {
        self.guards
            .access()
            .authorize(workspace_id, ctx.user_id, WorkspaceAction::ViewTask)
            .await?;

        self.tasks.find_by_workspace(workspace_id, filter).await
    }

    /// A single task.
    pub async fn get_task(&self, ctx: &RequestContext, task_id: Uuid) -> Result<Task, AppError> {
        let task = self.load(task_id).await?;
        self.guards
            .access()
            .authorize(task.workspace_id, ctx.user_id, WorkspaceAction::ViewTask)
            .await?;
        Ok(task)
    }

    /// Apply a partial update. Members may only touch tasks they created or
    /// are assigned to.
    pub async fn update_task(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
        patch: TaskPatch,
    ) -> Result<Task, AppError> {
        let mut task = self.load(task_id).await?;
        self.guards.task_update(ctx.user_id, &task).await?;

        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::validation("Task title is required"));
        }

        task.apply(patch);
        if !self.tasks.update(&task).await? {
            return Err(AppError::not_found(TASK_NOT_FOUND));
        }

        info!(
            task_id = %task.id,
            user_id = %ctx.user_id,
            version = task.version,
            "Task updated"
        );
        Ok(task)
    }

    /// Delete a task and its comments. OWNER and ADMIN only.
    pub async fn delete_task(&self, ctx: &RequestContext, task_id: Uuid) -> Result<(), AppError> {
        let task = self.load(task_id).await?;
        self.guards.task_delete(ctx.user_id, &task).await?;

        if !self.tasks.delete(task.id).await? {
            return Err(AppError::not_found(TASK_NOT_FOUND));
        }

        info!(task_id = %task.id, user_id = %ctx.user_id, "Task deleted");
        Ok(())
    }

    async fn load(&self, task_id: Uuid) -> Result<Task, AppError> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::not_found(TASK_NOT_FOUND))
    }
}
