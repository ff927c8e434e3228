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

//! JWT signing for room grants and session tokens.
//!
//! Room grants are signed with the video API secret and consumed by the
//! media layer; session tokens are signed with the backend's own secret and
//! consumed by the [`crate::auth::AuthUser`] extractor. This module is the
//! only place that touches `jsonwebtoken`: handlers mint grants through
//! [`sign_room_grant`] and never see the signing machinery.

use chrono::Utc;
use collab_types::{RoomGrantClaims, SessionClaims};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::error::AppError;

/// Sign a room grant: "join `room` as identity `participant`".
///
/// The grant is an HMAC-SHA256 JWT with `iss` set to the video API key and
/// signed with the video API secret, valid for `ttl_secs` from now.
pub fn sign_room_grant(
    api_key: &str,
    api_secret: &str,
    ttl_secs: i64,
    room: &str,
    participant: &str,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = RoomGrantClaims {
        sub: participant.to_string(),
        room: room.to_string(),
        room_join: true,
        exp: now + ttl_secs,
        iss: api_key.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(api_secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign room grant: {e}");
        AppError::signing_failed()
    })
}

/// Sign a session token identifying an authenticated user.
pub fn generate_session_token(
    secret: &str,
    user_id: i64,
    email: &str,
    name: &str,
    ttl_secs: i64,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        exp: now + ttl_secs,
        iss: SessionClaims::ISSUER.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign session token: {e}");
        AppError::signing_failed()
    })
}

/// Decode and validate a session token.
///
/// Checks the HMAC signature, the `exp` claim, and that the issuer is
/// [`SessionClaims::ISSUER`].
pub fn verify_session_token(
    secret: &str,
    token: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation.set_issuer(&[SessionClaims::ISSUER]);
    validation.validate_exp = true;

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}
