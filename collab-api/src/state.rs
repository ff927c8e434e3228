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

//! Shared application state passed to every Axum handler via `State`.

use crate::config::Config;
use sqlx::PgPool;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub db: PgPool,
    /// Session token signing secret.
    pub jwt_secret: String,
    /// Video API key (`iss` claim of room grants).
    pub video_api_key: String,
    /// Video API secret used to sign room grants.
    pub video_api_secret: String,
    /// Room grant time-to-live in seconds.
    pub grant_ttl_secs: i64,
}

impl AppState {
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            jwt_secret: config.jwt_secret.clone(),
            video_api_key: config.video_api_key.clone(),
            video_api_secret: config.video_api_secret.clone(),
            grant_ttl_secs: config.grant_ttl_secs,
        }
    }
}
