//! Route definitions for the `/prompts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

/// Routes mounted at `/prompts`. All require authentication.
///
/// ```text
/// GET    /       -> list (?q, tag, folder, category)
/// POST   /       -> create
/// GET    /{id}   -> get
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompts::list).post(prompts::create))
        .route(
            "/{id}",
            get(prompts::get).put(prompts::update).delete(prompts::delete),
        )
}
