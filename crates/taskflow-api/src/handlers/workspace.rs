//! Workspace handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::CreateWorkspaceRequest;
use crate::dto::response::{WorkspaceResponse, map_all};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /workspaces
pub async fn create_workspace(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateWorkspaceRequest>,
) -> Result<(StatusCode, Json<WorkspaceResponse>), ApiError> {
    let ws = state.workspaces.create_workspace(&auth, &req.name).await?;
    Ok((StatusCode::CREATED, Json(ws.into())))
}

/// GET /workspaces
pub async fn list_workspaces(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<WorkspaceResponse>>, ApiError> {
    let list = state.workspaces.list_my_workspaces(&auth).await?;
    Ok(Json(map_all(list)))
}

/// GET /workspaces/{id}
pub async fn get_workspace(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkspaceResponse>, ApiError> {
    let ws = state.workspaces.get_workspace(&auth, id).await?;
    Ok(Json(ws.into()))
}
