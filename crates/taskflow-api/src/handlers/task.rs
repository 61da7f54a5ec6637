//! Task handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::{CreateTaskRequest, TaskListQuery, UpdateTaskRequest};
use crate::dto::response::{TaskResponse, map_all};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /projects/{id}/tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let task = state.tasks.create_task(&auth, project_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /workspaces/{id}/tasks?status=&priority=&assigneeId=&q=
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workspace_id): Path<Uuid>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state
        .tasks
        .list_tasks(&auth, workspace_id, &query.into())
        .await?;
    Ok(Json(map_all(tasks)))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.tasks.get_task(&auth, id).await?;
    Ok(Json(task.into()))
}

/// PATCH /tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.tasks.update_task(&auth, id, req.into()).await?;
    Ok(Json(task.into()))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.tasks.delete_task(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
