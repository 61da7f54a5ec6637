//! Application state shared across all handlers via Axum's `State` extractor.

use std::sync::Arc;

use taskflow_auth::{
    AccessControl, AccessPolicy, Argon2PasswordHasher, CredentialService, JwtDecoder,
    OsSecretGenerator, ResourceGuards, SecretGenerator,
};
use taskflow_core::config::AppConfig;
use taskflow_database::{DatabasePool, Stores};
use taskflow_service::{
    CommentService, InviteService, ProjectService, TaskService, WorkspaceService,
};

/// Shared application state injected into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool, absent when running on the in-memory store.
    pub database: Option<DatabasePool>,
    /// Access token verification.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Registration, login, refresh rotation, and logout.
    pub credentials: Arc<CredentialService>,
    pub workspaces: Arc<WorkspaceService>,
    pub projects: Arc<ProjectService>,
    pub tasks: Arc<TaskService>,
    pub comments: Arc<CommentService>,
    pub invites: Arc<InviteService>,
}

impl AppState {
    /// Wire every service over the given stores.
    pub fn new(config: AppConfig, stores: Stores, database: Option<DatabasePool>) -> Self {
        let access = AccessControl::new(stores.memberships.clone(), AccessPolicy::new());
        let guards = ResourceGuards::new(access.clone());
        let secrets: Arc<dyn SecretGenerator> = Arc::new(OsSecretGenerator);

        let credentials = CredentialService::new(
            stores.users.clone(),
            stores.refresh_credentials.clone(),
            Arc::new(Argon2PasswordHasher::new()),
            secrets.clone(),
            &config.auth,
        );

        Self {
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            credentials: Arc::new(credentials),
            workspaces: Arc::new(WorkspaceService::new(
                stores.workspaces.clone(),
                access.clone(),
            )),
            projects: Arc::new(ProjectService::new(stores.projects.clone(), access.clone())),
            tasks: Arc::new(TaskService::new(
                stores.projects.clone(),
                stores.tasks.clone(),
                guards.clone(),
            )),
            comments: Arc::new(CommentService::new(
                stores.comments.clone(),
                stores.tasks.clone(),
                access,
            )),
            invites: Arc::new(InviteService::new(
                stores.invites.clone(),
                stores.users.clone(),
                guards,
                secrets,
            )),
            config: Arc::new(config),
            database,
        }
    }
}
