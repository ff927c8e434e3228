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

//! Axum router configuration for the collaboration backend API.

pub mod video;
pub mod workspaces;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        // Video room grants
        .route("/api/v1/video/token", post(video::generate_token))
        // Workspace CRUD
        .route("/api/v1/workspaces", post(workspaces::create_workspace))
        .route("/api/v1/workspaces", get(workspaces::list_workspaces))
        .route(
            "/api/v1/workspaces/{workspace_id}",
            get(workspaces::get_workspace),
        )
        // Membership
        .route(
            "/api/v1/workspaces/{workspace_id}/members",
            post(workspaces::add_members),
        )
}
