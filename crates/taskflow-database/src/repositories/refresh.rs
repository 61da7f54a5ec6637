//! Refresh credential repository implementation.
//!
//! One row per user, keyed on `user_id`. Rotation is a conditional update on
//! the presented hash so that two concurrent refreshes cannot both succeed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use taskflow_core::result::AppResult;
use taskflow_entity::credential::RefreshCredential;

use super::db_error;
use crate::traits::RefreshCredentialStore;

/// Repository for stored refresh credentials.
#[derive(Debug, Clone)]
pub struct RefreshCredentialRepository {
    pool: PgPool,
}

impl RefreshCredentialRepository {
    /// Create a new refresh credential repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshCredentialStore for RefreshCredentialRepository {
    async fn upsert(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO refresh_tokens (user_id, token_hash, expires_at, updated_at) \
             VALUES ($1, $2, $3, NOW()) \
             ON CONFLICT (user_id) DO UPDATE \
             SET token_hash = EXCLUDED.token_hash, \
                 expires_at = EXCLUDED.expires_at, \
                 updated_at = NOW()",
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to store refresh credential"))?;
        Ok(())
    }

    async fn find_live_by_hash(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RefreshCredential>> {
        sqlx::query_as::<_, RefreshCredential>(
            "SELECT user_id, token_hash, expires_at, updated_at FROM refresh_tokens \
             WHERE token_hash = $1 AND expires_at > $2",
        )
        .bind(token_hash)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find refresh credential"))
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<RefreshCredential>> {
        sqlx::query_as::<_, RefreshCredential>(
            "SELECT user_id, token_hash, expires_at, updated_at FROM refresh_tokens \
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find refresh credential for user"))
    }

    async fn rotate(
        &self,
        user_id: Uuid,
        current_hash: &str,
        new_hash: &str,
        new_expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE refresh_tokens \
             SET token_hash = $3, expires_at = $4, updated_at = NOW() \
             WHERE user_id = $1 AND token_hash = $2 AND expires_at > $5",
        )
        .bind(user_id)
        .bind(current_hash)
        .bind(new_hash)
        .bind(new_expires_at)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to rotate refresh credential"))?;
        Ok(result.rows_affected() == 1)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete refresh credential"))?;
        Ok(result.rows_affected() > 0)
    }
}
