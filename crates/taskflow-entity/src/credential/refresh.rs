//! Refresh credential entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The single live refresh credential of a user.
///
/// Only the SHA-256 hex digest of the opaque secret is persisted. There is at
/// most one row per user: issuance overwrites it and every successful refresh
/// rotates the hash and expiry in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefreshCredential {
    /// Owner of the credential (unique).
    pub user_id: Uuid,
    /// SHA-256 hex digest of the opaque secret.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// After this instant the credential no longer refreshes.
    pub expires_at: DateTime<Utc>,
    /// Last issuance or rotation time.
    pub updated_at: DateTime<Utc>,
}

impl RefreshCredential {
    /// Whether the credential is still usable at `now` (expiry is exclusive).
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}
