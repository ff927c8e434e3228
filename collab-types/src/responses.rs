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

//! Response types for the collaboration backend REST API.
//!
//! Successful endpoints return their payload directly; failed endpoints
//! return an [`ErrorResponse`] (`{"error": "<message>"}`) paired with the
//! appropriate HTTP status code.

use serde::{Deserialize, Serialize};

/// Body of every failed API response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// A user identity as embedded in workspace representations.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img: Option<String>,
}

/// A membership row inside [`WorkspaceResponse`], with the member's
/// identity populated.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WorkspaceMemberResponse {
    pub id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    /// RFC 3339 timestamp of when the member joined.
    pub joined_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

/// Full workspace representation returned by create/get and listed by list.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WorkspaceResponse {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    /// RFC 3339 timestamp of when the workspace was created.
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserResponse>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<WorkspaceMemberResponse>,
}

/// Response payload for `GET /api/v1/workspaces`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListWorkspacesResponse {
    pub workspaces: Vec<WorkspaceResponse>,
    pub total: i64,
}

/// Response payload for `POST /api/v1/workspaces/{workspace_id}/members`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AddMembersResponse {
    pub message: String,
    /// Number of membership rows actually inserted. Candidates that were
    /// already members or did not resolve to a user are not reported.
    pub added_count: usize,
}

/// Response payload for `POST /api/v1/video/token`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenResponse {
    pub token: String,
}
