//! Route definitions for the `/export` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Routes mounted at `/export`. All require authentication.
///
/// ```text
/// POST /json   -> JSON attachment
/// POST /pdf    -> PDF attachment
/// POST /notion -> push to Notion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/json", post(export::export_json))
        .route("/pdf", post(export::export_pdf))
        .route("/notion", post(export::export_notion))
}
