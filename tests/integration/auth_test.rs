//! Integration tests for the credential lifecycle.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, string_field};

#[tokio::test]
async fn test_register_issues_bearer_tokens_and_normalizes_email() {
    let app = TestApp::new();

    let resp = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({ "email": "  Alice@Example.COM", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(string_field(&resp.body, "tokenType"), "Bearer");
    assert!(!string_field(&resp.body, "refreshToken").is_empty());

    let access = string_field(&resp.body, "accessToken");
    let me = app.request("GET", "/auth/me", None, Some(&access)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(string_field(&me.body, "email"), "alice@example.com");
}

#[tokio::test]
async fn test_register_same_normalized_email_conflicts() {
    let app = TestApp::new();
    app.register(" A@B.com ").await;

    let resp = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({ "email": "a@b.com", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(string_field(&resp.body, "message"), "Email already registered");
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    let app = TestApp::new();

    let bad_email = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({ "email": "not-an-email", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let short_password = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({ "email": "bob@example.com", "password": "short" })),
            None,
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    let user = app.register("carol@example.com").await;

    let wrong_password = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": user.email, "password": "wrong-password" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "nobody@example.com", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_login_replaces_previous_refresh_credential() {
    let app = TestApp::new();
    let user = app.register("dave@example.com").await;

    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "DAVE@example.com", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);

    let stale = app
        .request(
            "POST",
            "/auth/refresh",
            Some(json!({ "refreshToken": user.refresh_token })),
            None,
        )
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);

    let fresh = app
        .request(
            "POST",
            "/auth/refresh",
            Some(json!({ "refreshToken": string_field(&login.body, "refreshToken") })),
            None,
        )
        .await;
    assert_eq!(fresh.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_rotation_invalidates_predecessor() {
    let app = TestApp::new();
    let user = app.register("erin@example.com").await;

    let first = app
        .request(
            "POST",
            "/auth/refresh",
            Some(json!({ "refreshToken": user.refresh_token })),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    let rotated = string_field(&first.body, "refreshToken");
    assert_ne!(rotated, user.refresh_token);

    let replay = app
        .request(
            "POST",
            "/auth/refresh",
            Some(json!({ "refreshToken": user.refresh_token })),
            None,
        )
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
    assert_eq!(string_field(&replay.body, "message"), "Invalid refresh token");

    let next = app
        .request(
            "POST",
            "/auth/refresh",
            Some(json!({ "refreshToken": rotated })),
            None,
        )
        .await;
    assert_eq!(next.status, StatusCode::OK);
}

#[tokio::test]
async fn test_concurrent_refresh_has_one_winner() {
    let (app, gated) = TestApp::with_lockstep_refresh();
    let user = app.register("frank@example.com").await;
    let body = json!({ "refreshToken": user.refresh_token });

    let (a, b) = tokio::join!(
        app.request("POST", "/auth/refresh", Some(body.clone()), None),
        app.request("POST", "/auth/refresh", Some(body), None),
    );

    assert_eq!(gated.rotation_count(), 2);
    let mut statuses = [a.status, b.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::UNAUTHORIZED]);

    let loser = if a.status == StatusCode::OK { &b } else { &a };
    assert_eq!(string_field(&loser.body, "message"), "Invalid refresh token");
}

#[tokio::test]
async fn test_logout_revokes_refresh_but_not_access() {
    let app = TestApp::new();
    let user = app.register("grace@example.com").await;

    let logout = app
        .request("POST", "/auth/logout", None, Some(&user.access_token))
        .await;
    assert_eq!(logout.status, StatusCode::NO_CONTENT);

    let refresh = app
        .request(
            "POST",
            "/auth/refresh",
            Some(json!({ "refreshToken": user.refresh_token })),
            None,
        )
        .await;
    assert_eq!(refresh.status, StatusCode::UNAUTHORIZED);

    // Access tokens are stateless and stay valid until they expire.
    let me = app
        .request("GET", "/auth/me", None, Some(&user.access_token))
        .await;
    assert_eq!(me.status, StatusCode::OK);

    let again = app
        .request("POST", "/auth/logout", None, Some(&user.access_token))
        .await;
    assert_eq!(again.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_protected_routes_require_a_valid_bearer() {
    let app = TestApp::new();

    let missing = app.request("GET", "/workspaces", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/auth/me", None, Some("not.a.jwt"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_reports_in_memory_store() {
    let app = TestApp::new();
    let resp = app.request("GET", "/health", None, None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(string_field(&resp.body, "status"), "ok");
    assert_eq!(string_field(&resp.body, "database"), "in-memory");
}
