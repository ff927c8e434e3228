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

//! JWT claim payloads.
//!
//! Two tokens flow through the system: the **room grant** the backend mints
//! for the video-conferencing media layer, and the **session token** that
//! identifies an authenticated caller to the backend itself. Both are
//! HMAC-SHA256 JWTs; they are signed with different secrets.

use serde::{Deserialize, Serialize};

/// JWT payload for a room access grant.
///
/// The backend signs the grant with the video API secret; the media layer
/// validates the signature and admits `sub` into `room`.
///
/// # Example payload
///
/// ```json
/// {
///   "sub": "Alice",
///   "room": "standup-2026",
///   "room_join": true,
///   "exp": 1786406400,
///   "iss": "<video api key>"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RoomGrantClaims {
    /// Participant identity joining the room.
    pub sub: String,

    /// The room the participant is authorized to join.
    pub room: String,

    /// Must be `true` for the media layer to accept the connection.
    pub room_join: bool,

    /// Expiration timestamp (Unix seconds). The grant is rejected after
    /// this time.
    pub exp: i64,

    /// The video API key identifying which credential pair signed the grant.
    pub iss: String,
}

/// JWT payload for a backend session token, carried in the `session` cookie.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// The authenticated user's id, stringified.
    pub sub: String,

    /// The authenticated user's email.
    pub email: String,

    /// The authenticated user's display name.
    pub name: String,

    /// Expiration timestamp (Unix seconds).
    pub exp: i64,

    /// Issuer identifier. Always [`SessionClaims::ISSUER`].
    pub iss: String,
}

impl SessionClaims {
    /// The expected issuer value for session tokens produced by this backend.
    pub const ISSUER: &'static str = "collab-backend";
}
