//! Integration tests for the invite flow, including the end-to-end
//! onboarding scenario.

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;

use taskflow_database::InviteStore;
use taskflow_entity::invite::Invite;
use taskflow_entity::workspace::WorkspaceRole;

use crate::helpers::{TestApp, string_field, uuid_field};

#[tokio::test]
async fn test_end_to_end_viewer_onboarding() {
    let app = TestApp::new();

    let mut owner = app.register("a@example.com").await;
    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "a@example.com", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    owner.access_token = string_field(&login.body, "accessToken");

    let ws = app.workspace(&owner, "Acme").await;
    let project = app.project(&owner, ws).await;
    let task = app.task(&owner, project, json!({ "title": "First task" })).await;
    assert_eq!(task.status, StatusCode::CREATED);
    let task_id = uuid_field(&task.body, "id");

    let b = app.register("b@example.com").await;
    let before = app
        .request("GET", &format!("/tasks/{task_id}"), None, Some(&b.access_token))
        .await;
    assert_eq!(before.status, StatusCode::NOT_FOUND);

    let token = app.invite(&owner, ws, "b@example.com", "VIEWER").await;
    let accepted = app.accept(&b, &token).await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(uuid_field(&accepted.body, "workspaceId"), ws);
    assert_eq!(string_field(&accepted.body, "role"), "VIEWER");

    let after = app
        .request("GET", &format!("/tasks/{task_id}"), None, Some(&b.access_token))
        .await;
    assert_eq!(after.status, StatusCode::OK);
    assert_eq!(string_field(&after.body, "title"), "First task");

    let create = app.task(&b, project, json!({ "title": "Sneaky" })).await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invite_projection_is_pending_for_seven_days() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;

    let resp = app
        .request(
            "POST",
            &format!("/workspaces/{ws}/invites"),
            Some(json!({ "email": "  New@Example.com", "role": "MEMBER" })),
            Some(&owner.access_token),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(string_field(&resp.body, "email"), "new@example.com");
    assert_eq!(string_field(&resp.body, "role"), "MEMBER");
    assert_eq!(uuid_field(&resp.body, "workspaceId"), ws);
    assert!(resp.body["acceptedAt"].is_null());

    let expires_at: chrono::DateTime<Utc> = string_field(&resp.body, "expiresAt").parse().unwrap();
    let remaining = expires_at - Utc::now();
    assert!(remaining > Duration::days(6) && remaining <= Duration::days(7));
}

#[tokio::test]
async fn test_only_owner_and_admin_issue_invites() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let member = app.member(&owner, ws, "member@example.com", "MEMBER").await;
    let admin = app.member(&owner, ws, "admin@example.com", "ADMIN").await;

    let by_member = app
        .request(
            "POST",
            &format!("/workspaces/{ws}/invites"),
            Some(json!({ "email": "x@example.com", "role": "VIEWER" })),
            Some(&member.access_token),
        )
        .await;
    assert_eq!(by_member.status, StatusCode::FORBIDDEN);

    app.invite(&admin, ws, "x@example.com", "VIEWER").await;
}

#[tokio::test]
async fn test_accept_with_other_email_is_forbidden() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let token = app.invite(&owner, ws, "intended@example.com", "MEMBER").await;

    let intruder = app.register("intruder@example.com").await;
    let resp = app.accept(&intruder, &token).await;
    assert_eq!(resp.status, StatusCode::FORBIDDEN);

    // The invite is untouched and still redeemable by its target.
    let intended = app.register("INTENDED@example.com").await;
    let resp = app.accept(&intended, &token).await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_invite_is_single_use() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let token = app.invite(&owner, ws, "once@example.com", "VIEWER").await;
    let user = app.register("once@example.com").await;

    assert_eq!(app.accept(&user, &token).await.status, StatusCode::OK);
    let second = app.accept(&user, &token).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(string_field(&second.body, "message"), "Invite not found");
}

#[tokio::test]
async fn test_expired_invite_is_not_found() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let user = app.register("late@example.com").await;

    let mut invite = Invite::new(
        ws,
        "late@example.com".to_string(),
        WorkspaceRole::Member,
        "expired-token".to_string(),
    );
    invite.expires_at = Utc::now() - Duration::minutes(1);
    InviteStore::create(&app.store, &invite).await.unwrap();

    let resp = app.accept(&user, "expired-token").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_existing_member_cannot_accept_again() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let member = app.member(&owner, ws, "member@example.com", "MEMBER").await;

    let token = app.invite(&owner, ws, "member@example.com", "ADMIN").await;
    let resp = app.accept(&member, &token).await;
    assert_eq!(resp.status, StatusCode::CONFLICT);
    assert_eq!(string_field(&resp.body, "message"), "Already a member");
}

#[tokio::test]
async fn test_unknown_token_is_not_found() {
    let app = TestApp::new();
    let user = app.register("someone@example.com").await;
    let resp = app.accept(&user, "does-not-exist").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
