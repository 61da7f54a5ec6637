//! Auth handlers: register, login, refresh, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use taskflow_auth::AuthTokens;

use crate::dto::request::{CredentialsRequest, RefreshRequest};
use crate::dto::response::MeResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthTokens>), ApiError> {
    let tokens = state.credentials.register(&req.email, &req.password).await?;
    Ok((StatusCode::CREATED, Json(tokens)))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<Json<AuthTokens>, ApiError> {
    let tokens = state.credentials.login(&req.email, &req.password).await?;
    Ok(Json(tokens))
}

/// POST /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> Result<Json<AuthTokens>, ApiError> {
    let tokens = state.credentials.refresh(&req.refresh_token).await?;
    Ok(Json(tokens))
}

/// POST /auth/logout
///
/// Revokes the refresh credential. Access tokens already issued stay valid
/// until they expire.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, ApiError> {
    state.credentials.logout(auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = state.credentials.current_user(auth.user_id).await?;
    Ok(Json(MeResponse::from(user)))
}
