//! Project service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use taskflow_auth::{AccessControl, WorkspaceAction};
use taskflow_core::error::AppError;
use taskflow_database::ProjectStore;
use taskflow_entity::project::{CreateProject, Project};

use crate::context::RequestContext;

/// Request to create a project.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
}

/// Project CRUD gated by workspace role.
#[derive(Clone)]
pub struct ProjectService {
    projects: Arc<dyn ProjectStore>,
    access: AccessControl,
}

impl std::fmt::Debug for ProjectService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectService").finish_non_exhaustive()
    }
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(projects: Arc<dyn ProjectStore>, access: AccessControl) -> Self {
        Self { projects, access }
    }

    /// Create a project. OWNER and ADMIN only.
    pub async fn create_project(
        &self,
        ctx: &RequestContext,
        workspace_id: Uuid,
        req: CreateProjectRequest,
    ) -> Result<Project, AppError> {
        self.access
            .authorize(workspace_id, ctx.user_id, WorkspaceAction::CreateProject)
            .await?;

        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Project name is required"));
        }

        let project = CreateProject {
            workspace_id,
            name: name.to_string(),
            description: req.description,
        }
        .into_project();
        self.projects.create(&project).await?;

        info!(
            project_id = %project.id,
            workspace_id = %workspace_id,
            user_id = %ctx.user_id,
            "Project created"
        );
        Ok(project)
    }

    /// Projects of a workspace, oldest first.
    pub async fn list_projects(
        &self,
        ctx: &RequestContext,
        workspace_id: Uuid,
    ) -> Result<Vec<Project>, AppError> {
        self.access
            .authorize(workspace_id, ctx.user_id, WorkspaceAction::ViewProject)
            .await?;
        self.projects.find_by_workspace(workspace_id).await
    }

    /// A single project.
    pub async fn get_project(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Project, AppError> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        self.access
            .authorize(project.workspace_id, ctx.user_id, WorkspaceAction::ViewProject)
            .await?;
        Ok(project)
    }
}
