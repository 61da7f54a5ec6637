//! Workspace repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use taskflow_core::result::AppResult;
use taskflow_entity::workspace::{Membership, Workspace, WorkspaceRole};

use super::db_error;
use crate::traits::WorkspaceStore;

/// Repository for workspaces.
#[derive(Debug, Clone)]
pub struct WorkspaceRepository {
    pool: PgPool,
}

impl WorkspaceRepository {
    /// Create a new workspace repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkspaceStore for WorkspaceRepository {
    async fn create_with_owner(&self, workspace: &Workspace) -> AppResult<Membership> {
        let membership =
            Membership::new(workspace.id, workspace.created_by, WorkspaceRole::Owner);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin workspace transaction"))?;

        sqlx::query(
            "INSERT INTO workspaces (id, name, created_by, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(workspace.id)
        .bind(&workspace.name)
        .bind(workspace.created_by)
        .bind(workspace.created_at)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to create workspace"))?;

        sqlx::query(
            "INSERT INTO workspace_members (workspace_id, user_id, role, created_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(membership.workspace_id)
        .bind(membership.user_id)
        .bind(membership.role)
        .bind(membership.created_at)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to create owner membership"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit workspace transaction"))?;

        Ok(membership)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Workspace>> {
        sqlx::query_as::<_, Workspace>(
            "SELECT id, name, created_by, created_at FROM workspaces WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find workspace"))
    }

    async fn find_for_member(&self, user_id: Uuid) -> AppResult<Vec<Workspace>> {
        sqlx::query_as::<_, Workspace>(
            "SELECT w.id, w.name, w.created_by, w.created_at \
             FROM workspaces w \
             JOIN workspace_members m ON m.workspace_id = w.id \
             WHERE m.user_id = $1 \
             ORDER BY w.created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list workspaces for member"))
    }
}
