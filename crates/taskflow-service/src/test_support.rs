//! Shared fixtures for service tests, backed by the in-memory store.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use taskflow_auth::{AccessControl, AccessPolicy, OsSecretGenerator, ResourceGuards};
use taskflow_database::{MembershipStore, MemoryStore, UserStore};
use taskflow_entity::project::Project;
use taskflow_entity::user::User;
use taskflow_entity::workspace::{Membership, WorkspaceRole};

use crate::{
    CommentService, CreateProjectRequest, InviteService, ProjectService, RequestContext,
    TaskService, WorkspaceService,
};

pub(crate) struct Harness {
    pub store: MemoryStore,
    pub access: AccessControl,
    pub workspaces: WorkspaceService,
    pub projects: ProjectService,
    pub tasks: TaskService,
    pub comments: CommentService,
    pub invites: InviteService,
}

impl Harness {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let access = AccessControl::new(Arc::new(store.clone()), AccessPolicy::new());
        let guards = ResourceGuards::new(access.clone());

        Self {
            workspaces: WorkspaceService::new(Arc::new(store.clone()), access.clone()),
            projects: ProjectService::new(Arc::new(store.clone()), access.clone()),
            tasks: TaskService::new(
                Arc::new(store.clone()),
                Arc::new(store.clone()),
                guards.clone(),
            ),
            comments: CommentService::new(
                Arc::new(store.clone()),
                Arc::new(store.clone()),
                access.clone(),
            ),
            invites: InviteService::new(
                Arc::new(store.clone()),
                Arc::new(store.clone()),
                guards,
                Arc::new(OsSecretGenerator),
            ),
            access,
            store,
        }
    }

    /// A caller with no stored account and no memberships.
    pub fn user(&self) -> RequestContext {
        RequestContext::new(Uuid::new_v4())
    }

    /// A caller with a stored account.
    pub async fn registered(&self, email: &str) -> RequestContext {
        self.register_existing(Uuid::new_v4(), email).await
    }

    /// Store an account for a known id.
    pub async fn register_existing(&self, id: Uuid, email: &str) -> RequestContext {
        let user = User {
            id,
            email: email.to_string(),
            password_hash: "unused".to_string(),
            created_at: Utc::now(),
        };
        UserStore::create(&self.store, &user).await.unwrap();
        RequestContext::new(id)
    }

    /// A fresh workspace and its owner.
    pub async fn workspace(&self) -> (RequestContext, Uuid) {
        let owner = self.user();
        let ws = self
            .workspaces
            .create_workspace(&owner, "Workspace")
            .await
            .unwrap();
        (owner, ws.id)
    }

    /// A caller holding `role` in `workspace_id`.
    pub async fn member(&self, workspace_id: Uuid, role: WorkspaceRole) -> RequestContext {
        let ctx = self.user();
        MembershipStore::create(&self.store, &Membership::new(workspace_id, ctx.user_id, role))
            .await
            .unwrap();
        ctx
    }

    pub async fn project(&self, owner: &RequestContext, workspace_id: Uuid) -> Project {
        self.projects
            .create_project(
                owner,
                workspace_id,
                CreateProjectRequest {
                    name: "Project".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap()
    }
}
