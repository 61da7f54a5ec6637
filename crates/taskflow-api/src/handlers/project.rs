//! Project handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::CreateProjectBody;
use crate::dto::response::{ProjectResponse, map_all};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /workspaces/{id}/projects
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workspace_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateProjectBody>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let project = state
        .projects
        .create_project(&auth, workspace_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /workspaces/{id}/projects
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = state.projects.list_projects(&auth, workspace_id).await?;
    Ok(Json(map_all(projects)))
}

/// GET /projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state.projects.get_project(&auth, id).await?;
    Ok(Json(project.into()))
}
