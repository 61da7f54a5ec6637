//! Invite service.
//!
//! An invite moves from pending to accepted exactly once. Expiry is implicit:
//! a pending invite past `expires_at` is never returned by the store again.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use taskflow_auth::{ResourceGuards, SecretGenerator};
use taskflow_core::email::normalize_email;
use taskflow_core::error::{AppError, ErrorKind};
use taskflow_database::{InviteStore, UserStore};
use taskflow_entity::invite::Invite;
use taskflow_entity::workspace::WorkspaceRole;

use crate::context::RequestContext;

const INVITE_NOT_FOUND: &str = "Invite not found";

/// Request to invite someone into a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInviteRequest {
    /// Target email; normalized before storage.
    pub email: String,
    /// Role granted on acceptance.
    pub role: WorkspaceRole,
}

/// What the caller joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteAcceptance {
    /// Workspace joined.
    pub workspace_id: Uuid,
    /// Role granted.
    pub role: WorkspaceRole,
}

/// Issues and redeems invites.
#[derive(Clone)]
pub struct InviteService {
    invites: Arc<dyn InviteStore>,
    users: Arc<dyn UserStore>,
    guards: ResourceGuards,
    secrets: Arc<dyn SecretGenerator>,
}

impl std::fmt::Debug for InviteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InviteService").finish_non_exhaustive()
    }
}

impl InviteService {
    /// Creates a new invite service.
    pub fn new(
        invites: Arc<dyn InviteStore>,
        users: Arc<dyn UserStore>,
        guards: ResourceGuards,
        secrets: Arc<dyn SecretGenerator>,
    ) -> Self {
        Self {
            invites,
            users,
            guards,
            secrets,
        }
    }

    /// Issue an invite valid for seven days. OWNER and ADMIN only.
    pub async fn create_invite(
        &self,
        ctx: &RequestContext,
        workspace_id: Uuid,
        req: CreateInviteRequest,
    ) -> Result<Invite, AppError> {
        self.guards.invite_issue(workspace_id, ctx.user_id).await?;

        let email = normalize_email(&req.email);
        if email.is_empty() {
            return Err(AppError::validation("Invite email is required"));
        }

        let invite = Invite::new(workspace_id, email, req.role, self.secrets.invite_token());
        self.invites.create(&invite).await?;

        info!(
            invite_id = %invite.id,
            workspace_id = %workspace_id,
            role = %invite.role,
            invited_by = %ctx.user_id,
            "Invite created"
        );
        Ok(invite)
    }

    /// Redeem an invite for the caller.
    ///
    /// Unknown, expired, and already-accepted tokens all fail `NotFound`;
    /// an email mismatch fails `Forbidden`; an existing member gets `Conflict`.
    pub async fn accept_invite(
        &self,
        ctx: &RequestContext,
        token: &str,
    ) -> Result<InviteAcceptance, AppError> {
        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        let now = Utc::now();
        let invite = self
            .invites
            .find_pending_by_token(token, now)
            .await?
            .ok_or_else(|| AppError::not_found(INVITE_NOT_FOUND))?;

        if let Err(err) = self.guards.invite_accept(&invite, &user.email, now) {
            warn!(invite_id = %invite.id, user_id = %user.id, "Invite acceptance refused");
            return Err(err);
        }

        match self.guards.access().role_of(invite.workspace_id, user.id).await {
            Ok(_) => return Err(AppError::conflict("Already a member")),
            Err(err) if err.kind == ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }

        if !self.invites.accept(&invite, user.id, now).await? {
            // Lost a race with another acceptance or crossed expiry.
            return Err(AppError::not_found(INVITE_NOT_FOUND));
        }

        info!(
            invite_id = %invite.id,
            workspace_id = %invite.workspace_id,
            user_id = %user.id,
            role = %invite.role,
            "Invite accepted"
        );
        Ok(InviteAcceptance {
            workspace_id: invite.workspace_id,
            role: invite.role,
        })
    }
}
