/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Integration tests for workspace CRUD and membership endpoints.


use axum::body::Body;
use axum::http::StatusCode;
use collab_types::responses::{
    AddMembersResponse, ErrorResponse, ListWorkspacesResponse, WorkspaceResponse,
};
use serial_test::serial;
use test_helpers::*;
use tower::ServiceExt;

#[tokio::test]
#[serial]
async fn test_create_workspace_owner_is_member() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-owner@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let owner_id = seed_user(&pool, emails[0], "Owner").await;

    let app = build_app(pool.clone());
    let req = request_with_session("POST", "/api/v1/workspaces", owner_id, emails[0], "Owner")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"name": "Design Crew"}"#))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: WorkspaceResponse = response_json(resp).await;
    assert_eq!(body.name, "Design Crew");
    assert_eq!(body.owner_id, owner_id);
    let owner = body.owner.expect("owner should be populated");
    assert_eq!(owner.id, owner_id);
    assert_eq!(owner.email, emails[0]);
    // Even with no member_ids, the owner holds a membership row.
    assert_eq!(body.members.len(), 1);
    assert_eq!(body.members[0].user_id, owner_id);
    assert!(body.members[0].user.is_some());

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_create_workspace_with_members() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = [
        "ws-owner@example.com",
        "ws-member1@example.com",
        "ws-member2@example.com",
    ];
    cleanup_test_data(&pool, &emails).await;
    let owner_id = seed_user(&pool, emails[0], "Owner").await;
    let member1 = seed_user(&pool, emails[1], "MemberOne").await;
    let member2 = seed_user(&pool, emails[2], "MemberTwo").await;

    let app = build_app(pool.clone());
    let payload = serde_json::json!({ "name": "Launch Team", "member_ids": [member1, member2] });
    let req = request_with_session("POST", "/api/v1/workspaces", owner_id, emails[0], "Owner")
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: WorkspaceResponse = response_json(resp).await;
    assert_eq!(body.members.len(), 3);
    let member_ids: Vec<i64> = body.members.iter().map(|m| m.user_id).collect();
    assert!(member_ids.contains(&owner_id));
    assert!(member_ids.contains(&member1));
    assert!(member_ids.contains(&member2));

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_create_workspace_nonexistent_member_skipped() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-owner@example.com", "ws-member1@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let owner_id = seed_user(&pool, emails[0], "Owner").await;
    let member1 = seed_user(&pool, emails[1], "MemberOne").await;

    let app = build_app(pool.clone());
    let payload =
        serde_json::json!({ "name": "Ghost Hunters", "member_ids": [member1, 999_999_999_i64] });
    let req = request_with_session("POST", "/api/v1/workspaces", owner_id, emails[0], "Owner")
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    // The unknown id is skipped silently; the call still succeeds.
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: WorkspaceResponse = response_json(resp).await;
    assert_eq!(body.members.len(), 2);

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_create_workspace_owner_in_member_ids_no_duplicate() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-owner@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let owner_id = seed_user(&pool, emails[0], "Owner").await;

    let app = build_app(pool.clone());
    let payload = serde_json::json!({ "name": "Solo Act", "member_ids": [owner_id] });
    let req = request_with_session("POST", "/api/v1/workspaces", owner_id, emails[0], "Owner")
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: WorkspaceResponse = response_json(resp).await;
    assert_eq!(body.members.len(), 1);
    assert_eq!(body.members[0].user_id, owner_id);

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_create_workspace_name_boundaries() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-owner@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let owner_id = seed_user(&pool, emails[0], "Owner").await;

    for (name, expected) in [
        ("".to_string(), StatusCode::BAD_REQUEST),
        ("a".to_string(), StatusCode::BAD_REQUEST),
        ("a".repeat(101), StatusCode::BAD_REQUEST),
        ("ab".to_string(), StatusCode::CREATED),
        ("b".repeat(100), StatusCode::CREATED),
    ] {
        let app = build_app(pool.clone());
        let payload = serde_json::json!({ "name": name });
        let req = request_with_session("POST", "/api/v1/workspaces", owner_id, emails[0], "Owner")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(
            resp.status(),
            expected,
            "name of {} chars",
            name.chars().count()
        );

        if expected == StatusCode::BAD_REQUEST {
            let body: ErrorResponse = response_json(resp).await;
            assert!(!body.error.is_empty());
        }
    }

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_list_workspaces_scoped_to_membership() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-alice@example.com", "ws-bob@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let alice = seed_user(&pool, emails[0], "Alice").await;
    let bob = seed_user(&pool, emails[1], "Bob").await;

    for name in ["Alpha Space", "Beta Space"] {
        let app = build_app(pool.clone());
        let payload = serde_json::json!({ "name": name });
        let req = request_with_session("POST", "/api/v1/workspaces", alice, emails[0], "Alice")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        assert_eq!(app.oneshot(req).await.unwrap().status(), StatusCode::CREATED);
    }

    // Bob owns his own workspace, invisible to Alice.
    let app = build_app(pool.clone());
    let req = request_with_session("POST", "/api/v1/workspaces", bob, emails[1], "Bob")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"name": "Bob Cave"}"#))
        .unwrap();
    assert_eq!(app.oneshot(req).await.unwrap().status(), StatusCode::CREATED);

    let app = build_app(pool.clone());
    let req = request_with_session("GET", "/api/v1/workspaces", alice, emails[0], "Alice")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ListWorkspacesResponse = response_json(resp).await;
    assert_eq!(body.total, 2);
    let names: Vec<&str> = body.workspaces.iter().map(|w| w.name.as_str()).collect();
    // Newest first.
    assert_eq!(names, ["Beta Space", "Alpha Space"]);
    assert!(body.workspaces.iter().all(|w| !w.members.is_empty()));

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_get_workspace_not_found() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-alice@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let alice = seed_user(&pool, emails[0], "Alice").await;

    let app = build_app(pool.clone());
    let req = request_with_session(
        "GET",
        "/api/v1/workspaces/999999999",
        alice,
        emails[0],
        "Alice",
    )
    .body(Body::empty())
    .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = response_json(resp).await;
    assert_eq!(body.error, "workspace not found");

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_get_workspace_forbidden_for_non_member() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-alice@example.com", "ws-bob@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let alice = seed_user(&pool, emails[0], "Alice").await;
    let bob = seed_user(&pool, emails[1], "Bob").await;

    let app = build_app(pool.clone());
    let req = request_with_session("POST", "/api/v1/workspaces", alice, emails[0], "Alice")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"name": "Private Space"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: WorkspaceResponse = response_json(resp).await;

    let app = build_app(pool.clone());
    let req = request_with_session(
        "GET",
        &format!("/api/v1/workspaces/{}", created.id),
        bob,
        emails[1],
        "Bob",
    )
    .body(Body::empty())
    .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: ErrorResponse = response_json(resp).await;
    assert_eq!(body.error, "you are not a member of this workspace");

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_get_workspace_as_invited_member() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-alice@example.com", "ws-bob@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let alice = seed_user(&pool, emails[0], "Alice").await;
    let bob = seed_user(&pool, emails[1], "Bob").await;

    let app = build_app(pool.clone());
    let payload = serde_json::json!({ "name": "Shared Space", "member_ids": [bob] });
    let req = request_with_session("POST", "/api/v1/workspaces", alice, emails[0], "Alice")
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: WorkspaceResponse = response_json(resp).await;

    let app = build_app(pool.clone());
    let req = request_with_session(
        "GET",
        &format!("/api/v1/workspaces/{}", created.id),
        bob,
        emails[1],
        "Bob",
    )
    .body(Body::empty())
    .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: WorkspaceResponse = response_json(resp).await;
    assert_eq!(body.id, created.id);
    assert_eq!(body.owner_id, alice);
    assert_eq!(body.members.len(), 2);

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_add_members_counts_only_new_rows() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = [
        "ws-alice@example.com",
        "ws-carol@example.com",
        "ws-dave@example.com",
    ];
    cleanup_test_data(&pool, &emails).await;
    let alice = seed_user(&pool, emails[0], "Alice").await;
    let carol = seed_user(&pool, emails[1], "Carol").await;
    let dave = seed_user(&pool, emails[2], "Dave").await;

    let app = build_app(pool.clone());
    let req = request_with_session("POST", "/api/v1/workspaces", alice, emails[0], "Alice")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"name": "Growing Team"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: WorkspaceResponse = response_json(resp).await;

    let app = build_app(pool.clone());
    let payload = serde_json::json!({ "member_ids": [carol, dave] });
    let req = request_with_session(
        "POST",
        &format!("/api/v1/workspaces/{}/members", created.id),
        alice,
        emails[0],
        "Alice",
    )
    .header("Content-Type", "application/json")
    .body(Body::from(payload.to_string()))
    .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: AddMembersResponse = response_json(resp).await;
    assert_eq!(body.added_count, 2);
    assert_eq!(body.message, "members added successfully");

    // Duplicates, the owner, and unknown ids are all skipped silently.
    let app = build_app(pool.clone());
    let payload = serde_json::json!({ "member_ids": [carol, alice, 999_999_999_i64] });
    let req = request_with_session(
        "POST",
        &format!("/api/v1/workspaces/{}/members", created.id),
        alice,
        emails[0],
        "Alice",
    )
    .header("Content-Type", "application/json")
    .body(Body::from(payload.to_string()))
    .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: AddMembersResponse = response_json(resp).await;
    assert_eq!(body.added_count, 0);

    let app = build_app(pool.clone());
    let req = request_with_session(
        "GET",
        &format!("/api/v1/workspaces/{}", created.id),
        alice,
        emails[0],
        "Alice",
    )
    .body(Body::empty())
    .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let body: WorkspaceResponse = response_json(resp).await;
    assert_eq!(body.members.len(), 3);

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_add_members_requires_membership() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-alice@example.com", "ws-bob@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let alice = seed_user(&pool, emails[0], "Alice").await;
    let bob = seed_user(&pool, emails[1], "Bob").await;

    let app = build_app(pool.clone());
    let req = request_with_session("POST", "/api/v1/workspaces", alice, emails[0], "Alice")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"name": "Locked Room"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: WorkspaceResponse = response_json(resp).await;

    let app = build_app(pool.clone());
    let payload = serde_json::json!({ "member_ids": [bob] });
    let req = request_with_session(
        "POST",
        &format!("/api/v1/workspaces/{}/members", created.id),
        bob,
        emails[1],
        "Bob",
    )
    .header("Content-Type", "application/json")
    .body(Body::from(payload.to_string()))
    .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_add_members_workspace_not_found() {
    let Some(pool) = try_test_pool().await else { return };
    let emails = ["ws-alice@example.com"];
    cleanup_test_data(&pool, &emails).await;
    let alice = seed_user(&pool, emails[0], "Alice").await;

    let app = build_app(pool.clone());
    let req = request_with_session(
        "POST",
        "/api/v1/workspaces/999999999/members",
        alice,
        emails[0],
        "Alice",
    )
    .header("Content-Type", "application/json")
    .body(Body::from(r#"{"member_ids": [1]}"#))
    .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    cleanup_test_data(&pool, &emails).await;
}

#[tokio::test]
#[serial]
async fn test_workspaces_require_authentication() {
    let Some(pool) = try_test_pool().await else { return };

    let app = build_app(pool.clone());
    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/workspaces")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = response_json(resp).await;
    assert_eq!(body.error, "authentication required");
}
