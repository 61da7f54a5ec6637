//! Workspace membership: the (workspace, user) → role record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::WorkspaceRole;

/// Establishes both presence in and privilege within a workspace.
///
/// `(workspace_id, user_id)` is a unique composite key: a user holds at most
/// one role per workspace.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    /// The workspace.
    pub workspace_id: Uuid,
    /// The member.
    pub user_id: Uuid,
    /// The member's role in this workspace.
    pub role: WorkspaceRole,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}

impl Membership {
    /// Builds a new membership record.
    pub fn new(workspace_id: Uuid, user_id: Uuid, role: WorkspaceRole) -> Self {
        Self {
            workspace_id,
            user_id,
            role,
            created_at: Utc::now(),
        }
    }
}
