//! Handlers for the `/admin` resource (stats, users summary, cascading
//! user deletion).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].
//! The user count deliberately excludes admin accounts, matching the
//! users-summary aggregation.

use axum::extract::{Path, State};
use axum::Json;
use promptvault_core::error::CoreError;
use promptvault_core::roles::ROLE_ADMIN;
use promptvault_core::types::DbId;
use promptvault_db::models::user::UserSummary;
use promptvault_db::repositories::{PromptRepo, UserRepo};
use serde::Serialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /admin/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of non-admin accounts.
    pub user_count: i64,
    /// Number of prompts currently shared publicly.
    pub shared_prompt_count: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/stats
///
/// Aggregate counts only; no prompt details. Read-only.
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<StatsResponse>> {
    let user_count = UserRepo::count_members(&state.pool).await?;
    let shared_prompt_count = PromptRepo::count_public(&state.pool).await?;

    Ok(Json(StatsResponse {
        user_count,
        shared_prompt_count,
    }))
}

/// GET /admin/users/summary
///
/// Every non-admin user with their public-prompt count, sorted by share
/// count descending then email ascending.
pub async fn users_summary(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserSummary>>> {
    let summary = UserRepo::members_with_share_counts(&state.pool).await?;
    Ok(Json(summary))
}

/// DELETE /admin/users/{id}
///
/// Cascading deletion: strip the user's likes everywhere, delete their
/// prompts, delete the account -- atomically, in that order. Admins
/// cannot be deleted through this path.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    // 1. The target must exist and must not be an admin.
    let target = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    if target.role == ROLE_ADMIN {
        return Err(AppError::BadRequest("Cannot delete an admin user".into()));
    }

    // 2. Run the three-step cascade in one transaction. A concurrent
    //    deletion between the check and the cascade surfaces as 404.
    let deleted = UserRepo::delete_cascade(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    Ok(Json(json!({ "success": true })))
}
