//! Liveness probe.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::state::AppState;

/// Routes mounted at `/`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
///
/// Confirms the process is serving and the database answers a trivial
/// round trip.
async fn health(State(state): State<AppState>) -> AppResult<Json<Value>> {
    promptvault_db::health_check(&state.pool).await?;
    Ok(Json(json!({ "status": "ok" })))
}
