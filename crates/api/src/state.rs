use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The pool is constructed once at startup and injected here --
/// handlers never reach for a global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: promptvault_db::DbPool,
    /// Server configuration (JWT secret, CORS, Notion credentials).
    pub config: Arc<ServerConfig>,
}
