//! Store interfaces consumed by the auth and service layers.
//!
//! Every operation is bounded by a single storage round trip (or a single
//! transaction). Implementations must honor the atomicity stated on each
//! method: two implementations are provided, PostgreSQL (`repositories`) and
//! in-memory (`memory`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use taskflow_core::result::AppResult;
use taskflow_entity::comment::Comment;
use taskflow_entity::credential::RefreshCredential;
use taskflow_entity::invite::Invite;
use taskflow_entity::project::Project;
use taskflow_entity::task::{Task, TaskFilter};
use taskflow_entity::user::User;
use taskflow_entity::workspace::{Membership, Workspace, WorkspaceRole};

/// User persistence. Emails passed in are already normalized.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by normalized email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user. Fails with `Conflict` if the email is taken.
    async fn create(&self, user: &User) -> AppResult<()>;
}

/// Workspace persistence.
#[async_trait]
pub trait WorkspaceStore: Send + Sync + 'static {
    /// Insert a workspace together with its creator's OWNER membership,
    /// atomically.
    async fn create_with_owner(&self, workspace: &Workspace) -> AppResult<Membership>;

    /// Find a workspace by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Workspace>>;

    /// List the workspaces `user_id` is a member of.
    async fn find_for_member(&self, user_id: Uuid) -> AppResult<Vec<Workspace>>;
}

/// Membership persistence keyed on `(workspace_id, user_id)`.
#[async_trait]
pub trait MembershipStore: Send + Sync + 'static {
    /// Resolve the role of `user_id` in `workspace_id`, if any.
    async fn find_role(&self, workspace_id: Uuid, user_id: Uuid)
    -> AppResult<Option<WorkspaceRole>>;

    /// Insert a membership. Fails with `Conflict` if the pair already exists.
    async fn create(&self, membership: &Membership) -> AppResult<()>;

    /// Reassign the role of an existing membership. Returns `false` if absent.
    async fn update_role(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: WorkspaceRole,
    ) -> AppResult<bool>;
}

/// Single-slot-per-user refresh credential persistence.
#[async_trait]
pub trait RefreshCredentialStore: Send + Sync + 'static {
    /// Insert or overwrite the credential of `user_id` (upsert keyed on user).
    async fn upsert(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Find the credential whose hash matches and whose expiry is strictly
    /// after `now`.
    async fn find_live_by_hash(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RefreshCredential>>;

    /// Find the credential of `user_id`, live or not.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<RefreshCredential>>;

    /// Compare-and-swap rotation: replace hash and expiry only if the row of
    /// `user_id` still carries `current_hash` and is live at `now`.
    ///
    /// Returns `true` if this call performed the rotation.
    async fn rotate(
        &self,
        user_id: Uuid,
        current_hash: &str,
        new_hash: &str,
        new_expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<bool>;

    /// Delete the credential of `user_id`. Returns `true` if a row was removed.
    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<bool>;
}

/// Invite persistence.
#[async_trait]
pub trait InviteStore: Send + Sync + 'static {
    /// Insert a new invite.
    async fn create(&self, invite: &Invite) -> AppResult<()>;

    /// Find an invite by token that is unaccepted and unexpired at `now`.
    async fn find_pending_by_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Invite>>;

    /// Atomically mark the invite accepted (only if still pending at `now`)
    /// and insert the membership of `user_id` with the invite's role.
    ///
    /// Returns `false` if the invite was no longer pending; fails with
    /// `Conflict` if the membership already exists (nothing is written).
    async fn accept(&self, invite: &Invite, user_id: Uuid, now: DateTime<Utc>)
    -> AppResult<bool>;
}

/// Project persistence.
#[async_trait]
pub trait ProjectStore: Send + Sync + 'static {
    /// Insert a project.
    async fn create(&self, project: &Project) -> AppResult<()>;

    /// Find a project by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>>;

    /// List the projects of a workspace, oldest first.
    async fn find_by_workspace(&self, workspace_id: Uuid) -> AppResult<Vec<Project>>;
}

/// Task persistence.
#[async_trait]
pub trait TaskStore: Send + Sync + 'static {
    /// Insert a task.
    async fn create(&self, task: &Task) -> AppResult<()>;

    /// Find a task by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>>;

    /// List the tasks of a workspace matching `filter`, newest first.
    async fn find_by_workspace(
        &self,
        workspace_id: Uuid,
        filter: &TaskFilter,
    ) -> AppResult<Vec<Task>>;

    /// Persist the mutable fields of a task. Returns `false` if absent.
    async fn update(&self, task: &Task) -> AppResult<bool>;

    /// Delete a task and its comments. Returns `false` if absent.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Comment persistence.
#[async_trait]
pub trait CommentStore: Send + Sync + 'static {
    /// Insert a comment.
    async fn create(&self, comment: &Comment) -> AppResult<()>;

    /// List the comments of a task, oldest first.
    async fn find_by_task(&self, task_id: Uuid) -> AppResult<Vec<Comment>>;
}
