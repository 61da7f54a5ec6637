//! Invite entity model and its lifecycle states.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::workspace::WorkspaceRole;

/// How long an invite stays acceptable after issuance.
pub const INVITE_TTL_DAYS: i64 = 7;

/// A single-use, time-boxed, email-targeted capability to join a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invite {
    /// Unique invite identifier.
    pub id: Uuid,
    /// Workspace the invitee joins.
    pub workspace_id: Uuid,
    /// Normalized email of the invitee.
    pub email: String,
    /// Role granted on acceptance.
    pub role: WorkspaceRole,
    /// Opaque, unique acceptance token.
    pub token: String,
    /// Acceptance must happen strictly before this instant.
    pub expires_at: DateTime<Utc>,
    /// Set once, on acceptance. `None` means pending.
    pub accepted_at: Option<DateTime<Utc>>,
    /// When the invite was issued.
    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of an invite.
///
/// `Pending` → `Accepted` or `Pending` → `Expired`. Both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InviteState {
    /// Issued, not accepted, not expired.
    Pending,
    /// Accepted exactly once.
    Accepted,
    /// Not accepted before `expires_at`.
    Expired,
}

impl Invite {
    /// Builds a new pending invite with the standard TTL.
    pub fn new(workspace_id: Uuid, email: String, role: WorkspaceRole, token: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            workspace_id,
            email,
            role,
            token,
            expires_at: now + Duration::days(INVITE_TTL_DAYS),
            accepted_at: None,
            created_at: now,
        }
    }

    /// Resolves the lifecycle state at `now`.
    pub fn state_at(&self, now: DateTime<Utc>) -> InviteState {
        if self.accepted_at.is_some() {
            InviteState::Accepted
        } else if self.expires_at <= now {
            InviteState::Expired
        } else {
            InviteState::Pending
        }
    }

    /// Whether the invite can still be accepted at `now`.
    pub fn is_pending_at(&self, now: DateTime<Utc>) -> bool {
        self.state_at(now) == InviteState::Pending
    }
}
