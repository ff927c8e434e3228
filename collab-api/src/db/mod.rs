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

//! Database access layer: one module per table, free functions over sqlx.
//!
//! Functions that can run inside the workspace-creation transaction take
//! `impl PgExecutor<'_>` so the same query serves both pool and transaction
//! callers; everything else takes the pool directly.

pub mod members;
pub mod users;
pub mod workspaces;
