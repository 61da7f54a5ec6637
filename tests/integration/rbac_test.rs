//! Integration tests for workspace-scoped access control.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, string_field, uuid_field};

#[tokio::test]
async fn test_non_member_sees_not_found_everywhere() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let outsider = app.register("outsider@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let project = app.project(&owner, ws).await;
    let task = app.task(&owner, project, json!({ "title": "Ship it" })).await;
    let task_id = uuid_field(&task.body, "id");

    for path in [
        format!("/workspaces/{ws}"),
        format!("/workspaces/{ws}/projects"),
        format!("/workspaces/{ws}/tasks"),
        format!("/projects/{project}"),
        format!("/tasks/{task_id}"),
        format!("/tasks/{task_id}/comments"),
    ] {
        let resp = app
            .request("GET", &path, None, Some(&outsider.access_token))
            .await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "GET {path}");
    }

    // Even an operation no role could perform reports NotFound, not Forbidden.
    let invite = app
        .request(
            "POST",
            &format!("/workspaces/{ws}/invites"),
            Some(json!({ "email": "x@example.com", "role": "OWNER" })),
            Some(&outsider.access_token),
        )
        .await;
    assert_eq!(invite.status, StatusCode::NOT_FOUND);
    assert_eq!(string_field(&invite.body, "message"), "Workspace not found");
}

#[tokio::test]
async fn test_workspace_listing_is_scoped_to_membership() {
    let app = TestApp::new();
    let alice = app.register("alice@example.com").await;
    let bob = app.register("bob@example.com").await;
    let acme = app.workspace(&alice, "Acme").await;
    app.workspace(&bob, "Globex").await;

    let resp = app
        .request("GET", "/workspaces", None, Some(&alice.access_token))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    let list = resp.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(uuid_field(&list[0], "id"), acme);
    assert_eq!(string_field(&list[0], "name"), "Acme");
}

#[tokio::test]
async fn test_viewer_is_read_only() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let project = app.project(&owner, ws).await;
    let task = app.task(&owner, project, json!({ "title": "Read me" })).await;
    let task_id = uuid_field(&task.body, "id");
    let viewer = app.member(&owner, ws, "viewer@example.com", "VIEWER").await;

    let list = app
        .request(
            "GET",
            &format!("/workspaces/{ws}/tasks"),
            None,
            Some(&viewer.access_token),
        )
        .await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().unwrap().len(), 1);

    let create = app
        .task(&viewer, project, json!({ "title": "Nope" }))
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);

    let update = app
        .request(
            "PATCH",
            &format!("/tasks/{task_id}"),
            Some(json!({ "status": "DONE" })),
            Some(&viewer.access_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let comment = app
        .request(
            "POST",
            &format!("/tasks/{task_id}/comments"),
            Some(json!({ "body": "hi" })),
            Some(&viewer.access_token),
        )
        .await;
    assert_eq!(comment.status, StatusCode::FORBIDDEN);

    let project_create = app
        .request(
            "POST",
            &format!("/workspaces/{ws}/projects"),
            Some(json!({ "name": "Side quest" })),
            Some(&viewer.access_token),
        )
        .await;
    assert_eq!(project_create.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_member_updates_only_own_or_assigned_tasks() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let project = app.project(&owner, ws).await;
    let member = app.member(&owner, ws, "member@example.com", "MEMBER").await;

    let foreign = app.task(&owner, project, json!({ "title": "Owner's" })).await;
    let foreign_id = uuid_field(&foreign.body, "id");
    let denied = app
        .request(
            "PATCH",
            &format!("/tasks/{foreign_id}"),
            Some(json!({ "status": "IN_PROGRESS" })),
            Some(&member.access_token),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let own = app.task(&member, project, json!({ "title": "Mine" })).await;
    assert_eq!(own.status, StatusCode::CREATED);
    let own_id = uuid_field(&own.body, "id");
    let updated = app
        .request(
            "PATCH",
            &format!("/tasks/{own_id}"),
            Some(json!({ "status": "IN_PROGRESS", "priority": "HIGH" })),
            Some(&member.access_token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(string_field(&updated.body, "status"), "IN_PROGRESS");
    assert_eq!(string_field(&updated.body, "title"), "Mine");
    assert_eq!(updated.body["version"], 1);

    let assigned = app
        .task(
            &owner,
            project,
            json!({ "title": "Delegated", "assigneeId": member.id }),
        )
        .await;
    let assigned_id = uuid_field(&assigned.body, "id");
    let allowed = app
        .request(
            "PATCH",
            &format!("/tasks/{assigned_id}"),
            Some(json!({ "status": "DONE" })),
            Some(&member.access_token),
        )
        .await;
    assert_eq!(allowed.status, StatusCode::OK);

    let delete = app
        .request(
            "DELETE",
            &format!("/tasks/{own_id}"),
            None,
            Some(&member.access_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_delete_removes_task_and_comments() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let project = app.project(&owner, ws).await;
    let admin = app.member(&owner, ws, "admin@example.com", "ADMIN").await;

    let task = app.task(&owner, project, json!({ "title": "Doomed" })).await;
    let task_id = uuid_field(&task.body, "id");
    let comment = app
        .request(
            "POST",
            &format!("/tasks/{task_id}/comments"),
            Some(json!({ "body": "last words" })),
            Some(&owner.access_token),
        )
        .await;
    assert_eq!(comment.status, StatusCode::CREATED);

    let delete = app
        .request(
            "DELETE",
            &format!("/tasks/{task_id}"),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::NO_CONTENT);

    let comments = app
        .request(
            "GET",
            &format!("/tasks/{task_id}/comments"),
            None,
            Some(&owner.access_token),
        )
        .await;
    assert_eq!(comments.status, StatusCode::NOT_FOUND);
    assert_eq!(string_field(&comments.body, "message"), "Task not found");
}

#[tokio::test]
async fn test_task_listing_filters() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;
    let ws = app.workspace(&owner, "Acme").await;
    let project = app.project(&owner, ws).await;

    app.task(&owner, project, json!({ "title": "Write docs", "status": "DONE" }))
        .await;
    app.task(&owner, project, json!({ "title": "Fix login bug", "priority": "HIGH" }))
        .await;
    app.task(&owner, project, json!({ "title": "Release notes" }))
        .await;

    let done = app
        .request(
            "GET",
            &format!("/workspaces/{ws}/tasks?status=DONE"),
            None,
            Some(&owner.access_token),
        )
        .await;
    assert_eq!(done.status, StatusCode::OK);
    let done = done.body.as_array().unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(string_field(&done[0], "title"), "Write docs");

    let search = app
        .request(
            "GET",
            &format!("/workspaces/{ws}/tasks?q=LOGIN&priority=HIGH"),
            None,
            Some(&owner.access_token),
        )
        .await;
    let search = search.body.as_array().unwrap();
    assert_eq!(search.len(), 1);
    assert_eq!(string_field(&search[0], "title"), "Fix login bug");
}

#[tokio::test]
async fn test_missing_task_is_not_found() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com").await;

    let resp = app
        .request(
            "GET",
            &format!("/tasks/{}", uuid::Uuid::new_v4()),
            None,
            Some(&owner.access_token),
        )
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
