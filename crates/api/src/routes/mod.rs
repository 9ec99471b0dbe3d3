//! Route definitions, one thin module per resource.

pub mod admin;
pub mod auth;
pub mod community;
pub mod export;
pub mod health;
pub mod prompts;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy (paths are the client compatibility contract):
///
/// ```text
/// /health                          liveness probe (public)
///
/// /auth/register                   register (public)
/// /auth/login                      login (public)
///
/// /prompts                         list, create (auth required)
/// /prompts/{id}                    get, update, delete (auth required)
///
/// /community/public                public feed (no auth)
/// /community/{id}/publish          publish (auth required)
/// /community/{id}/unpublish        unpublish (auth required)
/// /community/{id}/like             like (auth required)
/// /community/{id}/unlike           unlike (auth required)
///
/// /admin/stats                     aggregate counts (admin only)
/// /admin/users/summary             per-user share counts (admin only)
/// /admin/users/{id}                cascading delete (admin only)
///
/// /export/json                     JSON attachment (auth required)
/// /export/pdf                      PDF attachment (auth required)
/// /export/notion                   Notion push (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/prompts", prompts::router())
        .nest("/community", community::router())
        .nest("/admin", admin::router())
        .nest("/export", export::router())
}
