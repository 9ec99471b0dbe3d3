//! Route definitions for the `/community` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::community;
use crate::state::AppState;

/// Routes mounted at `/community`.
///
/// ```text
/// GET  /public          -> public feed (?q, tag, sort; no auth)
/// POST /{id}/publish    -> publish (auth required)
/// POST /{id}/unpublish  -> unpublish (auth required)
/// POST /{id}/like       -> like (auth required)
/// POST /{id}/unlike     -> unlike (auth required)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/public", get(community::list_public))
        .route("/{id}/publish", post(community::publish))
        .route("/{id}/unpublish", post(community::unpublish))
        .route("/{id}/like", post(community::like))
        .route("/{id}/unlike", post(community::unlike))
}
