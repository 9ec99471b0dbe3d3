//! Handlers for the `/prompts` resource: owner-scoped CRUD and filtered
//! listing. Every operation is scoped to the authenticated caller; a
//! prompt owned by someone else is indistinguishable from a missing one.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use promptvault_core::error::CoreError;
use promptvault_core::tagging::suggest_tags;
use promptvault_core::types::DbId;
use promptvault_core::validate::{validate_prompt_text, validate_title};
use promptvault_db::models::prompt::{CreatePrompt, Prompt, PromptFilters, UpdatePrompt};
use promptvault_db::repositories::PromptRepo;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult, FieldError};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /prompts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptRequest {
    pub title: String,
    pub text: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub folder: Option<String>,
}

/// Request body for `PUT /prompts/{id}`. Any subset of mutable fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromptRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub folder: Option<String>,
    pub is_public: Option<bool>,
}

/// Query parameters for `GET /prompts`.
#[derive(Debug, Deserialize)]
pub struct ListPromptsParams {
    pub q: Option<String>,
    pub tag: Option<String>,
    pub folder: Option<String>,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /prompts
///
/// Create a prompt owned by the caller. When the client supplies no tags,
/// up to five are suggested from the prompt text.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePromptRequest>,
) -> AppResult<(StatusCode, Json<Prompt>)> {
    let mut errors = Vec::new();
    if let Err(e) = validate_title(&input.title) {
        errors.push(FieldError::new("title", e));
    }
    if let Err(e) = validate_prompt_text(&input.text) {
        errors.push(FieldError::new("text", e));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let tags = if input.tags.is_empty() {
        suggest_tags(&input.text)
    } else {
        input.tags
    };

    let prompt = PromptRepo::create(
        &state.pool,
        &CreatePrompt {
            owner_id: user.user_id,
            title: input.title,
            description: input.description,
            text: input.text,
            tags,
            category: input.category,
            folder: input.folder,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(prompt)))
}

/// GET /prompts
///
/// List the caller's prompts, most recently updated first, optionally
/// filtered by exact tag/folder/category and full-text `q`.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ListPromptsParams>,
) -> AppResult<Json<Vec<Prompt>>> {
    let filters = PromptFilters {
        q: params.q,
        tag: params.tag,
        folder: params.folder,
        category: params.category,
    };
    let prompts = PromptRepo::list_owned(&state.pool, user.user_id, &filters).await?;
    Ok(Json(prompts))
}

/// GET /prompts/{id}
pub async fn get(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Prompt>> {
    let prompt = PromptRepo::find_owned(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    Ok(Json(prompt))
}

/// PUT /prompts/{id}
///
/// Apply a partial update. Supplied fields are re-validated before the
/// write; omitted fields are left untouched.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePromptRequest>,
) -> AppResult<Json<Prompt>> {
    let mut errors = Vec::new();
    if let Some(title) = &input.title {
        if let Err(e) = validate_title(title) {
            errors.push(FieldError::new("title", e));
        }
    }
    if let Some(text) = &input.text {
        if let Err(e) = validate_prompt_text(text) {
            errors.push(FieldError::new("text", e));
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let update = UpdatePrompt {
        title: input.title,
        description: input.description,
        text: input.text,
        tags: input.tags,
        category: input.category,
        folder: input.folder,
        is_public: input.is_public,
    };

    let prompt = PromptRepo::update_owned(&state.pool, user.user_id, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    Ok(Json(prompt))
}

/// DELETE /prompts/{id}
///
/// Repeating a delete of an already-gone id yields the same 404.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = PromptRepo::delete_owned(&state.pool, user.user_id, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }));
    }
    Ok(Json(json!({ "success": true })))
}
