//! Role resolution and workspace gating.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use taskflow_core::error::AppError;
use taskflow_database::MembershipStore;
use taskflow_entity::workspace::WorkspaceRole;

use super::policy::{AccessPolicy, WorkspaceAction};

const WORKSPACE_NOT_FOUND: &str = "Workspace not found";

/// Decides whether a caller may act within a workspace.
///
/// Membership is always resolved before privilege, so a non-member sees
/// `NotFound` for every operation and never learns the workspace exists.
#[derive(Clone)]
pub struct AccessControl {
    memberships: Arc<dyn MembershipStore>,
    policy: Arc<AccessPolicy>,
}

impl std::fmt::Debug for AccessControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessControl")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl AccessControl {
    /// Creates access control over the given membership store.
    pub fn new(memberships: Arc<dyn MembershipStore>, policy: AccessPolicy) -> Self {
        Self {
            memberships,
            policy: Arc::new(policy),
        }
    }

    /// The caller's role in the workspace, or `NotFound`.
    pub async fn role_of(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<WorkspaceRole, AppError> {
        self.memberships
            .find_role(workspace_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(WORKSPACE_NOT_FOUND))
    }

    /// Succeeds iff the caller holds any role in the workspace.
    pub async fn require_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<WorkspaceRole, AppError> {
        self.role_of(workspace_id, user_id).await
    }

    /// Resolve the caller's role, then require it to be in `allowed`.
    pub async fn require_role_in(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        allowed: &[WorkspaceRole],
    ) -> Result<WorkspaceRole, AppError> {
        let role = self.role_of(workspace_id, user_id).await?;
        if allowed.contains(&role) {
            Ok(role)
        } else {
            debug!(
                workspace_id = %workspace_id,
                user_id = %user_id,
                role = %role,
                "Role not permitted"
            );
            Err(AppError::forbidden("Forbidden"))
        }
    }

    /// Gate `action` by the policy table. Returns the caller's role.
    pub async fn authorize(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        action: WorkspaceAction,
    ) -> Result<WorkspaceRole, AppError> {
        self.require_role_in(workspace_id, user_id, &self.policy.roles_for(action))
            .await
    }
}
