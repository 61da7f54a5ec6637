//! Bundle of every store behind trait objects, so callers can wire either
//! backend without caring which one is in use.

use std::sync::Arc;

use sqlx::PgPool;

use crate::memory::MemoryStore;
use crate::repositories::{
    CommentRepository, InviteRepository, MembershipRepository, ProjectRepository,
    RefreshCredentialRepository, TaskRepository, UserRepository, WorkspaceRepository,
};
use crate::traits::{
    CommentStore, InviteStore, MembershipStore, ProjectStore, RefreshCredentialStore, TaskStore,
    UserStore, WorkspaceStore,
};

/// Shared handles to all stores.
#[derive(Clone)]
pub struct Stores {
    /// Users.
    pub users: Arc<dyn UserStore>,
    /// Workspaces.
    pub workspaces: Arc<dyn WorkspaceStore>,
    /// Memberships.
    pub memberships: Arc<dyn MembershipStore>,
    /// Refresh credentials.
    pub refresh_credentials: Arc<dyn RefreshCredentialStore>,
    /// Invites.
    pub invites: Arc<dyn InviteStore>,
    /// Projects.
    pub projects: Arc<dyn ProjectStore>,
    /// Tasks.
    pub tasks: Arc<dyn TaskStore>,
    /// Comments.
    pub comments: Arc<dyn CommentStore>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}

impl Stores {
    /// PostgreSQL-backed stores sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            workspaces: Arc::new(WorkspaceRepository::new(pool.clone())),
            memberships: Arc::new(MembershipRepository::new(pool.clone())),
            refresh_credentials: Arc::new(RefreshCredentialRepository::new(pool.clone())),
            invites: Arc::new(InviteRepository::new(pool.clone())),
            projects: Arc::new(ProjectRepository::new(pool.clone())),
            tasks: Arc::new(TaskRepository::new(pool.clone())),
            comments: Arc::new(CommentRepository::new(pool)),
        }
    }

    /// In-memory stores sharing one state.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            users: Arc::new(store.clone()),
            workspaces: Arc::new(store.clone()),
            memberships: Arc::new(store.clone()),
            refresh_credentials: Arc::new(store.clone()),
            invites: Arc::new(store.clone()),
            projects: Arc::new(store.clone()),
            tasks: Arc::new(store.clone()),
            comments: Arc::new(store),
        }
    }
}
