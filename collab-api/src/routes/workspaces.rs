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

//! Handlers for workspace CRUD and membership endpoints.

use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use collab_types::{
    requests::{AddMembersRequest, CreateWorkspaceRequest},
    responses::{
        AddMembersResponse, ListWorkspacesResponse, UserResponse, WorkspaceMemberResponse,
        WorkspaceResponse,
    },
};
use sqlx::PgPool;
use tracing::info;

use crate::auth::AuthUser;
use crate::db::{members as db_members, users as db_users, workspaces as db_workspaces};
use crate::error::AppError;
use crate::state::AppState;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;

/// Strip control characters and surrounding whitespace from a workspace name.
fn sanitize_workspace_name(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| !c.is_control()).collect();
    cleaned.trim().to_string()
}

/// Validate a sanitized workspace name (2–100 characters).
fn validate_workspace_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::name_required());
    }
    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(AppError::name_length());
    }
    Ok(())
}

fn user_response(row: db_users::UserRow) -> UserResponse {
    UserResponse {
        id: row.id,
        email: row.email,
        nickname: row.nickname,
        profile_img: row.profile_img,
    }
}

fn member_response(row: db_members::MemberWithUserRow) -> WorkspaceMemberResponse {
    WorkspaceMemberResponse {
        id: row.id,
        user_id: row.user_id,
        role_id: row.role_id,
        joined_at: row.joined_at.to_rfc3339(),
        user: Some(UserResponse {
            id: row.user_id,
            email: row.email,
            nickname: row.nickname,
            profile_img: row.profile_img,
        }),
    }
}

/// Fetch owner and member identities for a workspace row and assemble the
/// full representation.
async fn hydrate_workspace(
    pool: &PgPool,
    row: &db_workspaces::WorkspaceRow,
) -> Result<WorkspaceResponse, AppError> {
    let owner = db_users::get_by_id(pool, row.owner_id).await?;
    let members = db_members::list_with_users(pool, row.id).await?;

    Ok(WorkspaceResponse {
        id: row.id,
        name: row.name.clone(),
        owner_id: row.owner_id,
        created_at: row.created_at.to_rfc3339(),
        owner: owner.map(user_response),
        members: members.into_iter().map(member_response).collect(),
    })
}

/// Verify that the caller holds a membership row (authorization check).
async fn require_member(state: &AppState, workspace_id: i64, user_id: i64) -> Result<(), AppError> {
    if !db_members::is_member(&state.db, workspace_id, user_id).await? {
        return Err(AppError::not_a_member());
    }
    Ok(())
}

fn create_failed(err: sqlx::Error) -> AppError {
    tracing::error!("Database error creating workspace: {err}");
    AppError::internal("failed to create workspace")
}

/// POST /api/v1/workspaces
///
/// Creates the workspace, the owner's membership row, and any requested
/// member rows in a single transaction; a failed insert rolls back the
/// whole creation.
pub async fn create_workspace(
    State(state): State<AppState>,
    AuthUser { user_id, .. }: AuthUser,
    Json(body): Json<CreateWorkspaceRequest>,
) -> Result<(StatusCode, Json<WorkspaceResponse>), AppError> {
    let name = sanitize_workspace_name(&body.name);
    validate_workspace_name(&name)?;

    let mut tx = state.db.begin().await.map_err(create_failed)?;

    let workspace = db_workspaces::insert(&mut *tx, &name, user_id)
        .await
        .map_err(create_failed)?;

    // The owner is always a member.
    db_members::insert(&mut *tx, workspace.id, user_id)
        .await
        .map_err(create_failed)?;

    for &member_id in &body.member_ids {
        if member_id == user_id {
            continue;
        }
        // Unknown user ids are skipped, not reported.
        if !db_users::exists(&mut *tx, member_id)
            .await
            .map_err(create_failed)?
        {
            continue;
        }
        db_members::insert(&mut *tx, workspace.id, member_id)
            .await
            .map_err(create_failed)?;
    }

    tx.commit().await.map_err(create_failed)?;

    info!(
        "Workspace '{}' (id {}) created by user {}",
        workspace.name, workspace.id, user_id
    );

    let response = hydrate_workspace(&state.db, &workspace).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/workspaces
pub async fn list_workspaces(
    State(state): State<AppState>,
    AuthUser { user_id, .. }: AuthUser,
) -> Result<Json<ListWorkspacesResponse>, AppError> {
    let rows = db_workspaces::list_for_member(&state.db, user_id).await?;

    let mut workspaces = Vec::with_capacity(rows.len());
    for row in &rows {
        workspaces.push(hydrate_workspace(&state.db, row).await?);
    }

    let total = workspaces.len() as i64;
    Ok(Json(ListWorkspacesResponse { workspaces, total }))
}

/// GET /api/v1/workspaces/{workspace_id}
pub async fn get_workspace(
    State(state): State<AppState>,
    AuthUser { user_id, .. }: AuthUser,
    Path(workspace_id): Path<i64>,
) -> Result<Json<WorkspaceResponse>, AppError> {
    let row = db_workspaces::get_by_id(&state.db, workspace_id)
        .await?
        .ok_or_else(AppError::workspace_not_found)?;

    require_member(&state, row.id, user_id).await?;

    let response = hydrate_workspace(&state.db, &row).await?;
    Ok(Json(response))
}

/// POST /api/v1/workspaces/{workspace_id}/members
///
/// Candidates that are already members, do not resolve to an existing user,
/// or fail to insert are skipped without aborting the call; only the number
/// of rows actually added is reported.
pub async fn add_members(
    State(state): State<AppState>,
    AuthUser { user_id, .. }: AuthUser,
    Path(workspace_id): Path<i64>,
    Json(body): Json<AddMembersRequest>,
) -> Result<Json<AddMembersResponse>, AppError> {
    let row = db_workspaces::get_by_id(&state.db, workspace_id)
        .await?
        .ok_or_else(AppError::workspace_not_found)?;

    require_member(&state, row.id, user_id).await?;

    let existing: HashSet<i64> = db_members::member_user_ids(&state.db, row.id)
        .await?
        .into_iter()
        .collect();

    let mut added_count = 0usize;
    for &candidate in &body.member_ids {
        if existing.contains(&candidate) {
            continue;
        }
        match db_users::exists(&state.db, candidate).await {
            Ok(true) => {}
            _ => continue,
        }
        if db_members::insert(&state.db, row.id, candidate).await.is_ok() {
            added_count += 1;
        }
    }

    info!(
        "User {} added {} member(s) to workspace {}",
        user_id, added_count, row.id
    );

    Ok(Json(AddMembersResponse {
        message: "members added successfully".to_string(),
        added_count,
    }))
}
