//! Per-resource authorization rules built on [`AccessControl`].

use chrono::{DateTime, Utc};
use uuid::Uuid;

use taskflow_core::email::normalize_email;
use taskflow_core::error::AppError;
use taskflow_entity::invite::Invite;
use taskflow_entity::task::Task;
use taskflow_entity::workspace::WorkspaceRole;

use super::control::AccessControl;
use super::policy::WorkspaceAction;

/// Resource-level guards.
#[derive(Debug, Clone)]
pub struct ResourceGuards {
    access: AccessControl,
}

impl ResourceGuards {
    /// Wraps the given access control.
    pub fn new(access: AccessControl) -> Self {
        Self { access }
    }

    /// The underlying workspace gate.
    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    /// Owners and admins may update any task; members only tasks they created
    /// or are assigned to; viewers none.
    pub async fn task_update(&self, user_id: Uuid, task: &Task) -> Result<WorkspaceRole, AppError> {
        let role = self
            .access
            .authorize(task.workspace_id, user_id, WorkspaceAction::UpdateTask)
            .await?;

        if role == WorkspaceRole::Member && !task.is_owned_or_assigned_to(user_id) {
            return Err(AppError::forbidden("Forbidden"));
        }
        Ok(role)
    }

    /// Only owners and admins may delete tasks.
    pub async fn task_delete(&self, user_id: Uuid, task: &Task) -> Result<WorkspaceRole, AppError> {
        self.access
            .authorize(task.workspace_id, user_id, WorkspaceAction::DeleteTask)
            .await
    }

    /// Only owners and admins may issue invites.
    pub async fn invite_issue(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> Result<WorkspaceRole, AppError> {
        self.access
            .authorize(workspace_id, user_id, WorkspaceAction::CreateInvite)
            .await
    }

    /// The invite must still be pending and addressed to the caller's email.
    pub fn invite_accept(
        &self,
        invite: &Invite,
        caller_email: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        if !invite.is_pending_at(now) {
            return Err(AppError::not_found("Invite not found"));
        }
        if normalize_email(&invite.email) != normalize_email(caller_email) {
            return Err(AppError::forbidden("Invite email mismatch"));
        }
        Ok(())
    }
}
