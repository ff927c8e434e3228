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

//! Axum extractor that resolves the authenticated caller from the `session`
//! cookie.
//!
//! The cookie carries an HMAC-signed JWT ([`collab_types::SessionClaims`]).
//! Handlers receive the verified identity as an explicit parameter rather
//! than fishing it out of request extensions.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::token::verify_session_token;

/// The authenticated caller, verified from the `session` cookie.
///
/// Usage in a handler:
/// ```ignore
/// async fn my_handler(AuthUser { user_id, .. }: AuthUser) { ... }
/// ```
#[derive(Debug)]
pub struct AuthUser {
    pub user_id: i64,
    pub email: String,
    pub display_name: String,
}

/// Find the `session` cookie value in a `Cookie` header.
fn session_cookie(cookie_header: &str) -> Option<&str> {
    for pair in cookie_header.split(';') {
        let pair = pair.trim();
        if let Some(value) = pair.strip_prefix("session=") {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let token = session_cookie(cookie_header).ok_or_else(AppError::unauthorized)?;

        let claims = verify_session_token(&state.jwt_secret, token).map_err(|e| {
            tracing::debug!("Session token rejected: {e}");
            AppError::unauthorized()
        })?;

        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::unauthorized())?;

        Ok(AuthUser {
            user_id,
            email: claims.email,
            display_name: claims.name,
        })
    }
}
