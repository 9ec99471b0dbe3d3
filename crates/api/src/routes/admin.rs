//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require the `admin` role.
///
/// ```text
/// GET    /stats          -> aggregate counts
/// GET    /users/summary  -> per-user share counts
/// DELETE /users/{id}     -> cascading user deletion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(admin::stats))
        .route("/users/summary", get(admin::users_summary))
        .route("/users/{id}", delete(admin::delete_user))
}
