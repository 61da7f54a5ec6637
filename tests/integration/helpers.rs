//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Utc};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tokio::sync::Barrier;
use tower::ServiceExt;
use uuid::Uuid;

use taskflow_api::{AppState, build_app};
use taskflow_core::config::AppConfig;
use taskflow_core::result::AppResult;
use taskflow_database::{MemoryStore, RefreshCredentialStore, Stores};
use taskflow_entity::credential::RefreshCredential;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for seeding state the API cannot produce
    pub store: MemoryStore,
}

/// Parsed response
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty)
    pub body: Value,
}

/// A registered user and their current credentials.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let store = MemoryStore::new();
        Self::build(store.clone(), Stores::memory(store))
    }

    /// Like [`TestApp::new`], but refresh lookups wait for a second caller
    /// before either may rotate.
    pub fn with_lockstep_refresh() -> (Self, Arc<LockstepRefreshStore>) {
        let store = MemoryStore::new();
        let gated = Arc::new(LockstepRefreshStore::new(store.clone()));

        let mut stores = Stores::memory(store.clone());
        stores.refresh_credentials = gated.clone();

        (Self::build(store, stores), gated)
    }

    fn build(store: MemoryStore, stores: Stores) -> Self {
        let config: AppConfig = serde_json::from_value(json!({
            "database": { "url": "memory://" },
            "auth": { "jwt_secret": "integration-test-secret-with-32-bytes!!" }
        }))
        .expect("Failed to build test config");

        let state = AppState::new(config, stores, None);

        Self {
            router: build_app(state),
            store,
        }
    }

    /// Send a request and parse the JSON response
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Register a user and resolve their id through `/auth/me`
    pub async fn register(&self, email: &str) -> TestUser {
        let resp = self
            .request(
                "POST",
                "/auth/register",
                Some(json!({ "email": email, "password": "password123" })),
                None,
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED, "register {email}: {:?}", resp.body);

        let access_token = string_field(&resp.body, "accessToken");
        let refresh_token = string_field(&resp.body, "refreshToken");

        let me = self
            .request("GET", "/auth/me", None, Some(&access_token))
            .await;
        assert_eq!(me.status, StatusCode::OK);

        TestUser {
            id: uuid_field(&me.body, "id"),
            email: string_field(&me.body, "email"),
            access_token,
            refresh_token,
        }
    }

    /// Create a workspace owned by `owner`
    pub async fn workspace(&self, owner: &TestUser, name: &str) -> Uuid {
        let resp = self
            .request(
                "POST",
                "/workspaces",
                Some(json!({ "name": name })),
                Some(&owner.access_token),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);
        uuid_field(&resp.body, "id")
    }

    /// Create a project in `workspace_id`
    pub async fn project(&self, user: &TestUser, workspace_id: Uuid) -> Uuid {
        let resp = self
            .request(
                "POST",
                &format!("/workspaces/{workspace_id}/projects"),
                Some(json!({ "name": "Roadmap" })),
                Some(&user.access_token),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);
        uuid_field(&resp.body, "id")
    }

    /// Create a task in `project_id`
    pub async fn task(&self, user: &TestUser, project_id: Uuid, body: Value) -> TestResponse {
        self.request(
            "POST",
            &format!("/projects/{project_id}/tasks"),
            Some(body),
            Some(&user.access_token),
        )
        .await
    }

    /// Invite `email` with `role` and return the acceptance token
    pub async fn invite(
        &self,
        inviter: &TestUser,
        workspace_id: Uuid,
        email: &str,
        role: &str,
    ) -> String {
        let resp = self
            .request(
                "POST",
                &format!("/workspaces/{workspace_id}/invites"),
                Some(json!({ "email": email, "role": role })),
                Some(&inviter.access_token),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);
        string_field(&resp.body, "token")
    }

    /// Accept an invite as `user`
    pub async fn accept(&self, user: &TestUser, token: &str) -> TestResponse {
        self.request(
            "POST",
            &format!("/invites/accept?token={token}"),
            None,
            Some(&user.access_token),
        )
        .await
    }

    /// Register `email` and bring them into `workspace_id` with `role`
    pub async fn member(
        &self,
        owner: &TestUser,
        workspace_id: Uuid,
        email: &str,
        role: &str,
    ) -> TestUser {
        let user = self.register(email).await;
        let token = self.invite(owner, workspace_id, email, role).await;
        let resp = self.accept(&user, &token).await;
        assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);
        user
    }
}

/// Read a string field from a JSON body
pub fn string_field(body: &Value, field: &str) -> String {
    body.get(field)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("missing string field {field} in {body}"))
        .to_string()
}

/// Read a UUID field from a JSON body
pub fn uuid_field(body: &Value, field: &str) -> Uuid {
    string_field(body, field)
        .parse()
        .unwrap_or_else(|_| panic!("field {field} is not a UUID in {body}"))
}

/// Refresh store that parks each lookup at a two-party barrier, so two
/// concurrent refreshes both pass the lookup before either rotates.
pub struct LockstepRefreshStore {
    inner: MemoryStore,
    lookups: Barrier,
    rotations: AtomicUsize,
}

impl LockstepRefreshStore {
    fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            lookups: Barrier::new(2),
            rotations: AtomicUsize::new(0),
        }
    }

    /// Rotation attempts so far.
    pub fn rotation_count(&self) -> usize {
        self.rotations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RefreshCredentialStore for LockstepRefreshStore {
    async fn upsert(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        self.inner.upsert(user_id, token_hash, expires_at).await
    }

    async fn find_live_by_hash(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<RefreshCredential>> {
        let found = self.inner.find_live_by_hash(token_hash, now).await?;
        self.lookups.wait().await;
        Ok(found)
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<RefreshCredential>> {
        self.inner.find_by_user(user_id).await
    }

    async fn rotate(
        &self,
        user_id: Uuid,
        current_hash: &str,
        new_hash: &str,
        new_expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        self.rotations.fetch_add(1, Ordering::SeqCst);
        self.inner
            .rotate(user_id, current_hash, new_hash, new_expires_at, now)
            .await
    }

    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<bool> {
        self.inner.delete_by_user(user_id).await
    }
}
