//! In-memory store using a Tokio mutex, for tests and single-process runs.
//!
//! A single lock guards every table, so each trait method observes and
//! mutates a consistent snapshot, which gives the same atomicity the
//! PostgreSQL statements provide.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use taskflow_core::error::AppError;
use taskflow_core::result::AppResult;
use taskflow_entity::comment::Comment;
use taskflow_entity::credential::RefreshCredential;
use taskflow_entity::invite::Invite;
use taskflow_entity::project::Project;
use taskflow_entity::task::{Task, TaskFilter};
use taskflow_entity::user::User;
use taskflow_entity::workspace::{Membership, Workspace, WorkspaceRole};

use crate::traits::{
    CommentStore, InviteStore, MembershipStore, ProjectStore, RefreshCredentialStore, TaskStore,
    UserStore, WorkspaceStore,
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    workspaces: HashMap<Uuid, Workspace>,
    memberships: HashMap<(Uuid, Uuid), Membership>,
    refresh_credentials: HashMap<Uuid, RefreshCredential>,
    invites: HashMap<Uuid, Invite>,
    projects: HashMap<Uuid, Project>,
    tasks: HashMap<Uuid, Task>,
    comments: HashMap<Uuid, Comment>,
}

/// Every store trait over shared in-process tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.tables.lock().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict("Email already registered"));
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }
}

#[async_trait]
impl WorkspaceStore for MemoryStore {
    async fn create_with_owner(&self, workspace: &Workspace) -> AppResult<Membership> {
        let membership =
            Membership::new(workspace.id, workspace.created_by, WorkspaceRole::Owner);
        let mut tables = self.tables.lock().await;
        tables.workspaces.insert(workspace.id, workspace.clone());
        tables
            .memberships
            .insert((workspace.id, workspace.created_by), membership.clone());
        Ok(membership)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Workspace>> {
        Ok(self.tables.lock().await.workspaces.get(&id).cloned())
    }

    async fn find_for_member(&self, user_id: Uuid) -> AppResult<Vec<Workspace>> {
        let tables = self.tables.lock().await;
        let mut workspaces: Vec<Workspace> = tables
            .memberships
            .values()
            .filter(|m| m.user_id == user_id)
            .filter_map(|m| tables.workspaces.get(&m.workspace_id).cloned())
            .collect();
        workspaces.sort_by_key(|w| w.created_at);
        Ok(workspaces)
    }
}

#[async_trait]
impl MembershipStore for MemoryStore {
    async fn find_role(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<WorkspaceRole>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .memberships
            .get(&(workspace_id, user_id))
            .map(|m| m.role))
    }

    async fn create(&self, membership: &Membership) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        let key = (membership.workspace_id, membership.user_id);
        if tables.memberships.contains_key(&key) {
            return Err(AppError::conflict("Already a member"));
        }
        tables.memberships.insert(key, membership.clone());
        Ok(())
    }

    async fn update_role(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: WorkspaceRole,
    ) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        match tables.memberships.get_mut(&(workspace_id, user_id)) {
            Some(membership) => {
                membership.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl RefreshCredentialStore for MemoryStore {
    async fn upsert(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        tables.refresh_credentials.insert(
            user_id,
            RefreshCredential {
                user_id,
                token_hash: token_hash.to_string(),
                expires_at,
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn find_live_by_hash(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RefreshCredential>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .refresh_credentials
            .values()
            .find(|c| c.token_hash == token_hash && c.is_live_at(now))
            .cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<RefreshCredential>> {
        Ok(self
            .tables
            .lock()
            .await
            .refresh_credentials
            .get(&user_id)
            .cloned())
    }

    async fn rotate(
        &self,
        user_id: Uuid,
        current_hash: &str,
        new_hash: &str,
        new_expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        match tables.refresh_credentials.get_mut(&user_id) {
            Some(cred) if cred.token_hash == current_hash && cred.is_live_at(now) => {
                cred.token_hash = new_hash.to_string();
                cred.expires_at = new_expires_at;
                cred.updated_at = Utc::now();
                Ok(true)
            }
            _ => {
                debug!(user_id = %user_id, "Refresh rotation lost compare-and-swap");
                Ok(false)
            }
        }
    }

    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<bool> {
        Ok(self
            .tables
            .lock()
            .await
            .refresh_credentials
            .remove(&user_id)
            .is_some())
    }
}

#[async_trait]
impl InviteStore for MemoryStore {
    async fn create(&self, invite: &Invite) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        if tables.invites.values().any(|i| i.token == invite.token) {
            return Err(AppError::conflict("Invite token collision"));
        }
        tables.invites.insert(invite.id, invite.clone());
        Ok(())
    }

    async fn find_pending_by_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Invite>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .invites
            .values()
            .find(|i| i.token == token && i.is_pending_at(now))
            .cloned())
    }

    async fn accept(&self, invite: &Invite, user_id: Uuid, now: DateTime<Utc>) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;

        let pending = tables
            .invites
            .get(&invite.id)
            .map(|i| i.is_pending_at(now))
            .unwrap_or(false);
        if !pending {
            return Ok(false);
        }

        let key = (invite.workspace_id, user_id);
        if tables.memberships.contains_key(&key) {
            return Err(AppError::conflict("Already a member"));
        }

        if let Some(stored) = tables.invites.get_mut(&invite.id) {
            stored.accepted_at = Some(now);
        }
        tables.memberships.insert(
            key,
            Membership {
                workspace_id: invite.workspace_id,
                user_id,
                role: invite.role,
                created_at: now,
            },
        );
        Ok(true)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn create(&self, project: &Project) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        tables.projects.insert(project.id, project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        Ok(self.tables.lock().await.projects.get(&id).cloned())
    }

    async fn find_by_workspace(&self, workspace_id: Uuid) -> AppResult<Vec<Project>> {
        let tables = self.tables.lock().await;
        let mut projects: Vec<Project> = tables
            .projects
            .values()
            .filter(|p| p.workspace_id == workspace_id)
            .cloned()
            .collect();
        projects.sort_by_key(|p| p.created_at);
        Ok(projects)
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn create(&self, task: &Task) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        tables.tasks.insert(task.id, task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        Ok(self.tables.lock().await.tasks.get(&id).cloned())
    }

    async fn find_by_workspace(
        &self,
        workspace_id: Uuid,
        filter: &TaskFilter,
    ) -> AppResult<Vec<Task>> {
        let tables = self.tables.lock().await;
        let mut tasks: Vec<Task> = tables
            .tasks
            .values()
            .filter(|t| t.workspace_id == workspace_id && filter.matches(t))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn update(&self, task: &Task) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        match tables.tasks.get_mut(&task.id) {
            Some(stored) => {
                *stored = task.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        let removed = tables.tasks.remove(&id).is_some();
        if removed {
            tables.comments.retain(|_, c| c.task_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn create(&self, comment: &Comment) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        tables.comments.insert(comment.id, comment.clone());
        Ok(())
    }

    async fn find_by_task(&self, task_id: Uuid) -> AppResult<Vec<Comment>> {
        let tables = self.tables.lock().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.task_id == task_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.created_at);
        Ok(comments)
    }
}
