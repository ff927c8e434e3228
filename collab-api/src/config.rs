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

//! Application configuration loaded from environment variables.

use std::env;

/// Configuration for the collaboration backend API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8081").
    pub listen_addr: String,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Shared secret used to sign and verify session tokens (HMAC-SHA256).
    pub jwt_secret: String,
    /// Video API key; becomes the `iss` claim of signed room grants.
    pub video_api_key: String,
    /// Video API secret used to sign room grants (HMAC-SHA256).
    pub video_api_secret: String,
    /// Room grant time-to-live in seconds (default: 86400 = 24 hours).
    pub grant_ttl_secs: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `DATABASE_URL`
    /// - `JWT_SECRET`
    /// - `VIDEO_API_KEY`
    /// - `VIDEO_API_SECRET`
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8081"`)
    /// - `GRANT_TTL_SECS` (default: `"86400"`)
    pub fn from_env() -> Result<Self, String> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL environment variable is required")?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| "JWT_SECRET environment variable is required")?;
        let video_api_key = env::var("VIDEO_API_KEY")
            .map_err(|_| "VIDEO_API_KEY environment variable is required")?;
        let video_api_secret = env::var("VIDEO_API_SECRET")
            .map_err(|_| "VIDEO_API_SECRET environment variable is required")?;

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string());
        let grant_ttl_secs = env::var("GRANT_TTL_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<i64>()
            .map_err(|_| "GRANT_TTL_SECS must be a valid integer")?;

        Ok(Self {
            listen_addr,
            database_url,
            jwt_secret,
            video_api_key,
            video_api_secret,
            grant_ttl_secs,
        })
    }
}
