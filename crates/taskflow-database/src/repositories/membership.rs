//! Workspace membership repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use taskflow_core::result::AppResult;
use taskflow_entity::workspace::{Membership, WorkspaceRole};

use super::{db_error, map_insert_error};
use crate::traits::MembershipStore;

/// Repository for `(workspace, user) -> role` records.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipStore for MembershipRepository {
    async fn find_role(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<WorkspaceRole>> {
        sqlx::query_scalar::<_, WorkspaceRole>(
            "SELECT role FROM workspace_members WHERE workspace_id = $1 AND user_id = $2",
        )
        .bind(workspace_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to resolve membership role"))
    }

    async fn create(&self, membership: &Membership) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO workspace_members (workspace_id, user_id, role, created_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(membership.workspace_id)
        .bind(membership.user_id)
        .bind(membership.role)
        .bind(membership.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Already a member", "Failed to create membership"))?;
        Ok(())
    }

    async fn update_role(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: WorkspaceRole,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE workspace_members SET role = $3 WHERE workspace_id = $1 AND user_id = $2",
        )
        .bind(workspace_id)
        .bind(user_id)
        .bind(role)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update membership role"))?;
        Ok(result.rows_affected() > 0)
    }
}
