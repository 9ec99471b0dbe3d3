//! Handlers for the `/community` resource: publish/unpublish, the public
//! feed, and like/unlike.

use axum::extract::{Path, Query, State};
use axum::Json;
use promptvault_core::error::CoreError;
use promptvault_core::types::DbId;
use promptvault_db::models::prompt::{LikeOutcome, Prompt, PublicSort};
use promptvault_db::repositories::PromptRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /community/public`.
#[derive(Debug, Deserialize)]
pub struct PublicFeedParams {
    pub q: Option<String>,
    pub tag: Option<String>,
    /// `new` for newest-first; anything else is the trending default.
    pub sort: Option<String>,
}

/// Response body for like/unlike.
#[derive(Debug, Serialize)]
pub struct LikesResponse {
    pub likes: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /community/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Prompt>> {
    set_visibility(&state, &user, id, true).await
}

/// POST /community/{id}/unpublish
pub async fn unpublish(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Prompt>> {
    set_visibility(&state, &user, id, false).await
}

/// GET /community/public
///
/// The public feed: no identity required, only public prompts, capped at
/// 50 entries. `sort=new` orders by creation time; the default is
/// trending (likes descending, most recent update breaking ties).
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<PublicFeedParams>,
) -> AppResult<Json<Vec<Prompt>>> {
    let sort = PublicSort::from_query(params.sort.as_deref());
    let prompts =
        PromptRepo::list_public(&state.pool, params.q.as_deref(), params.tag.as_deref(), sort)
            .await?;
    Ok(Json(prompts))
}

/// POST /community/{id}/like
///
/// Record a like on a public prompt. 400 when the caller already liked
/// it, 404 when the prompt is missing or private.
pub async fn like(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<LikesResponse>> {
    match PromptRepo::like(&state.pool, id, user.user_id).await? {
        LikeOutcome::Liked(likes) => Ok(Json(LikesResponse { likes })),
        LikeOutcome::AlreadyLiked => Err(AppError::BadRequest("Already liked".into())),
        LikeOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        })),
    }
}

/// POST /community/{id}/unlike
///
/// Remove the caller's like. Unliking a prompt the caller never liked is
/// a no-op that still returns the current count.
pub async fn unlike(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<LikesResponse>> {
    let likes = PromptRepo::unlike(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    Ok(Json(LikesResponse { likes }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Owner-scoped visibility toggle shared by publish and unpublish.
async fn set_visibility(
    state: &AppState,
    user: &AuthUser,
    id: DbId,
    is_public: bool,
) -> AppResult<Json<Prompt>> {
    let prompt = PromptRepo::set_visibility(&state.pool, user.user_id, id, is_public)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    Ok(Json(prompt))
}
