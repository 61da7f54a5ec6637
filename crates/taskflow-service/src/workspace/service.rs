//! Workspace service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use taskflow_auth::{AccessControl, WorkspaceAction};
use taskflow_core::error::AppError;
use taskflow_database::WorkspaceStore;
use taskflow_entity::workspace::Workspace;

use crate::context::RequestContext;

/// Creates workspaces and lists those the caller belongs to.
#[derive(Clone)]
pub struct WorkspaceService {
    workspaces: Arc<dyn WorkspaceStore>,
    access: AccessControl,
}

impl std::fmt::Debug for WorkspaceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceService").finish_non_exhaustive()
    }
}

impl WorkspaceService {
    /// Creates a new workspace service.
    pub fn new(workspaces: Arc<dyn WorkspaceStore>, access: AccessControl) -> Self {
        Self { workspaces, access }
    }

    /// Create a workspace; the caller becomes its OWNER.
    pub async fn create_workspace(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Workspace, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Workspace name is required"));
        }

        let workspace = Workspace::new(name, ctx.user_id);
        self.workspaces.create_with_owner(&workspace).await?;

        info!(
            workspace_id = %workspace.id,
            user_id = %ctx.user_id,
            "Workspace created"
        );
        Ok(workspace)
    }

    /// Workspaces the caller is a member of.
    pub async fn list_my_workspaces(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Workspace>, AppError> {
        self.workspaces.find_for_member(ctx.user_id).await
    }

    /// A workspace the caller belongs to. Non-members get `NotFound`.
    pub async fn get_workspace(
        &self,
        ctx: &RequestContext,
        workspace_id: Uuid,
    ) -> Result<Workspace, AppError> {
        self.access
            .authorize(workspace_id, ctx.user_id, WorkspaceAction::ViewWorkspace)
            .await?;

        self.workspaces
            .find_by_id(workspace_id)
            .await?
            .ok_or_else(|| AppError::not_found("Workspace not found"))
    }
}
