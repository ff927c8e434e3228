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

//! Request types for the collaboration backend REST API.
//!
//! These types define the shape of request bodies. They are used by both
//! the server (for deserialization) and clients (for serialization).

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/workspaces`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateWorkspaceRequest {
    /// Workspace display name (2–100 characters after sanitization).
    pub name: String,

    /// User ids to invite as members. The owner is always a member and
    /// does not need to be listed here.
    #[serde(default)]
    pub member_ids: Vec<i64>,
}

/// Request body for `POST /api/v1/workspaces/{workspace_id}/members`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AddMembersRequest {
    /// Candidate user ids. Ids that are already members or do not resolve
    /// to an existing user are skipped without error.
    #[serde(default)]
    pub member_ids: Vec<i64>,
}

/// Request body for `POST /api/v1/video/token`.
///
/// Field names are camelCase on the wire to match the video clients.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Room the participant wants to join.
    #[serde(default)]
    pub room_name: String,

    /// Identity to join as. Falls back to the authenticated caller's
    /// display name when empty.
    #[serde(default)]
    pub participant_name: String,
}
