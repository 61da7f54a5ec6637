//! Route definitions for the TaskFlow HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route mounted. Layers are applied by
/// [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(workspace_routes())
        .merge(project_routes())
        .merge(task_routes())
        .merge(invite_routes())
        .route("/health", get(handlers::health::health))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workspaces",
            post(handlers::workspace::create_workspace).get(handlers::workspace::list_workspaces),
        )
        .route("/workspaces/{id}", get(handlers::workspace::get_workspace))
        .route(
            "/workspaces/{id}/projects",
            post(handlers::project::create_project).get(handlers::project::list_projects),
        )
        .route("/workspaces/{id}/tasks", get(handlers::task::list_tasks))
        .route(
            "/workspaces/{id}/invites",
            post(handlers::invite::create_invite),
        )
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects/{id}", get(handlers::project::get_project))
        .route("/projects/{id}/tasks", post(handlers::task::create_task))
}

fn task_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks/{id}",
            get(handlers::task::get_task)
                .patch(handlers::task::update_task)
                .delete(handlers::task::delete_task),
        )
        .route(
            "/tasks/{id}/comments",
            post(handlers::comment::add_comment).get(handlers::comment::list_comments),
        )
}

fn invite_routes() -> Router<AppState> {
    Router::new().route("/invites/accept", post(handlers::invite::accept_invite))
}
