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

//! Handler for the video room grant endpoint.

use axum::{extract::State, Json};
use collab_types::{requests::TokenRequest, responses::TokenResponse};
use tracing::info;

use crate::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use crate::token::sign_room_grant;

/// Resolve the participant identity: the requested name, or the caller's
/// display name when the request leaves it empty.
fn resolve_participant(requested: &str, fallback: &str) -> String {
    if requested.is_empty() {
        fallback.to_string()
    } else {
        requested.to_string()
    }
}

/// POST /api/v1/video/token
///
/// Mints a room grant valid for `grant_ttl_secs` (24 hours by default)
/// authorizing the participant to join the requested room.
pub async fn generate_token(
    State(state): State<AppState>,
    AuthUser { display_name, .. }: AuthUser,
    Json(body): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let participant = resolve_participant(&body.participant_name, &display_name);

    if body.room_name.is_empty() || participant.is_empty() {
        return Err(AppError::token_fields_required());
    }

    let token = sign_room_grant(
        &state.video_api_key,
        &state.video_api_secret,
        state.grant_ttl_secs,
        &body.room_name,
        &participant,
    )?;

    info!(
        "Issued room grant for '{}' to join '{}'",
        participant, body.room_name
    );

    Ok(Json(TokenResponse { token }))
}
