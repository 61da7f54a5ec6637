//! Invite handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use taskflow_service::InviteAcceptance;

use crate::dto::request::{AcceptInviteQuery, CreateInviteBody};
use crate::dto::response::InviteResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /workspaces/{id}/invites
pub async fn create_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workspace_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateInviteBody>,
) -> Result<(StatusCode, Json<InviteResponse>), ApiError> {
    let invite = state
        .invites
        .create_invite(&auth, workspace_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(invite.into())))
}

/// POST /invites/accept?token=...
pub async fn accept_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AcceptInviteQuery>,
) -> Result<Json<InviteAcceptance>, ApiError> {
    let accepted = state.invites.accept_invite(&auth, &query.token).await?;
    Ok(Json(accepted))
}
