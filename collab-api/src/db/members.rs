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

//! Workspace member table queries.
//!
//! `(workspace_id, user_id)` is unique; a duplicate insert fails with a
//! unique violation rather than silently upserting.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

/// Row returned from the `workspace_members` table.
#[derive(Debug, sqlx::FromRow)]
pub struct MemberRow {
    pub id: i64,
    pub workspace_id: i64,
    pub user_id: i64,
    pub role_id: Option<i64>,
    pub joined_at: DateTime<Utc>,
}

/// Membership row joined with the member's user identity, for hydrating
/// workspace responses.
#[derive(Debug, sqlx::FromRow)]
pub struct MemberWithUserRow {
    pub id: i64,
    pub user_id: i64,
    pub role_id: Option<i64>,
    pub joined_at: DateTime<Utc>,
    pub email: String,
    pub nickname: String,
    pub profile_img: Option<String>,
}

/// Insert a membership row.
pub async fn insert(
    executor: impl PgExecutor<'_>,
    workspace_id: i64,
    user_id: i64,
) -> Result<MemberRow, sqlx::Error> {
    sqlx::query_as::<_, MemberRow>(
        r#"
        INSERT INTO workspace_members (workspace_id, user_id)
        VALUES ($1, $2)
        RETURNING id, workspace_id, user_id, role_id, joined_at
        "#,
    )
    .bind(workspace_id)
    .bind(user_id)
    .fetch_one(executor)
    .await
}

/// List all members of a workspace with their user identities, in join order.
pub async fn list_with_users(
    pool: &PgPool,
    workspace_id: i64,
) -> Result<Vec<MemberWithUserRow>, sqlx::Error> {
    sqlx::query_as::<_, MemberWithUserRow>(
        r#"
        SELECT wm.id, wm.user_id, wm.role_id, wm.joined_at,
               u.email, u.nickname, u.profile_img
        FROM workspace_members wm
        JOIN users u ON u.id = wm.user_id
        WHERE wm.workspace_id = $1
        ORDER BY wm.joined_at ASC, wm.id ASC
        "#,
    )
    .bind(workspace_id)
    .fetch_all(pool)
    .await
}

/// Get the user ids of all current members.
pub async fn member_user_ids(
    pool: &PgPool,
    workspace_id: i64,
) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT user_id FROM workspace_members WHERE workspace_id = $1",
    )
    .bind(workspace_id)
    .fetch_all(pool)
    .await
}

/// Check whether `user_id` holds a membership row in `workspace_id`.
pub async fn is_member(
    pool: &PgPool,
    workspace_id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM workspace_members WHERE workspace_id = $1 AND user_id = $2)",
    )
    .bind(workspace_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}
