//! Invite repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use taskflow_core::result::AppResult;
use taskflow_entity::invite::Invite;

use super::{db_error, map_insert_error};
use crate::traits::InviteStore;

/// Repository for workspace invites.
#[derive(Debug, Clone)]
pub struct InviteRepository {
    pool: PgPool,
}

impl InviteRepository {
    /// Create a new invite repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteStore for InviteRepository {
    async fn create(&self, invite: &Invite) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO workspace_invites \
             (id, workspace_id, email, role, token, expires_at, accepted_at, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(invite.id)
        .bind(invite.workspace_id)
        .bind(&invite.email)
        .bind(invite.role)
        .bind(&invite.token)
        .bind(invite.expires_at)
        .bind(invite.accepted_at)
        .bind(invite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Invite token collision", "Failed to create invite"))?;
        Ok(())
    }

    async fn find_pending_by_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Invite>> {
        sqlx::query_as::<_, Invite>(
            "SELECT id, workspace_id, email, role, token, expires_at, accepted_at, created_at \
             FROM workspace_invites \
             WHERE token = $1 AND accepted_at IS NULL AND expires_at > $2",
        )
        .bind(token)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find invite by token"))
    }

    async fn accept(&self, invite: &Invite, user_id: Uuid, now: DateTime<Utc>) -> AppResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin invite transaction"))?;

        let marked = sqlx::query(
            "UPDATE workspace_invites SET accepted_at = $2 \
             WHERE id = $1 AND accepted_at IS NULL AND expires_at > $2",
        )
        .bind(invite.id)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to mark invite accepted"))?;

        if marked.rows_affected() != 1 {
            tx.rollback()
                .await
                .map_err(db_error("Failed to roll back invite transaction"))?;
            return Ok(false);
        }

        // A unique violation aborts the transaction; dropping `tx` rolls it back.
        sqlx::query(
            "INSERT INTO workspace_members (workspace_id, user_id, role, created_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(invite.workspace_id)
        .bind(user_id)
        .bind(invite.role)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, "Already a member", "Failed to create membership"))?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit invite transaction"))?;
        Ok(true)
    }
}
