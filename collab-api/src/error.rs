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

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `{"error": "<message>"}` with the appropriate
//! HTTP status code: validation failures map to 400, missing authentication
//! to 401, authorization failures to 403, absent entities to 404, and
//! downstream (database/signer) failures to 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use collab_types::ErrorResponse;

/// Application-level error that pairs an HTTP status code with an error body.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl AppError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: ErrorResponse::new(message),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "authentication required")
    }

    pub fn name_required() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "workspace name is required")
    }

    pub fn name_length() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "workspace name must be between 2 and 100 characters",
        )
    }

    pub fn token_fields_required() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "roomName and participantName are required",
        )
    }

    pub fn workspace_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "workspace not found")
    }

    pub fn not_a_member() -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            "you are not a member of this workspace",
        )
    }

    pub fn signing_failed() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "failed to generate token")
    }

    pub fn internal(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {err}");
        Self::internal("database error")
    }
}
