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

//! Workspace table queries.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

/// Row returned from the `workspaces` table.
#[derive(Debug, sqlx::FromRow)]
pub struct WorkspaceRow {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert a new workspace.
pub async fn insert(
    executor: impl PgExecutor<'_>,
    name: &str,
    owner_id: i64,
) -> Result<WorkspaceRow, sqlx::Error> {
    sqlx::query_as::<_, WorkspaceRow>(
        r#"
        INSERT INTO workspaces (name, owner_id)
        VALUES ($1, $2)
        RETURNING id, name, owner_id, created_at
        "#,
    )
    .bind(name)
    .bind(owner_id)
    .fetch_one(executor)
    .await
}

/// Get a workspace by id.
pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<WorkspaceRow>, sqlx::Error> {
    sqlx::query_as::<_, WorkspaceRow>(
        "SELECT id, name, owner_id, created_at FROM workspaces WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List workspaces where `user_id` holds a membership row, newest first.
pub async fn list_for_member(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<WorkspaceRow>, sqlx::Error> {
    sqlx::query_as::<_, WorkspaceRow>(
        r#"
        SELECT w.id, w.name, w.owner_id, w.created_at
        FROM workspaces w
        JOIN workspace_members wm ON wm.workspace_id = w.id
        WHERE wm.user_id = $1
        ORDER BY w.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
