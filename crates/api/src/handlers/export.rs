//! Handlers for the `/export` resource: JSON and PDF attachments, and the
//! Notion integration.
//!
//! Exports only ever include prompts the caller owns; ids belonging to
//! other users are silently dropped from the selection.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use promptvault_core::types::{DbId, Timestamp};
use promptvault_db::models::prompt::Prompt;
use promptvault_db::repositories::PromptRepo;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::notion::NotionClient;
use crate::pdf;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body shared by all export endpoints.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub ids: Vec<DbId>,
}

/// Export projection of a prompt: content and organization only, no
/// visibility or like state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedPrompt {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub text: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub folder: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Prompt> for ExportedPrompt {
    fn from(p: Prompt) -> Self {
        ExportedPrompt {
            id: p.id,
            title: p.title,
            description: p.description,
            text: p.text,
            tags: p.tags,
            category: p.category,
            folder: p.folder,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /export/json
///
/// Respond with a JSON array attachment of the selected prompts.
pub async fn export_json(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ExportRequest>,
) -> AppResult<impl IntoResponse> {
    let prompts = fetch_selection(&state, &user, &input).await?;
    let exported: Vec<ExportedPrompt> = prompts.into_iter().map(ExportedPrompt::from).collect();

    Ok((
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=prompts.json",
        )],
        Json(exported),
    ))
}

/// POST /export/pdf
///
/// Respond with a PDF attachment, one page per selected prompt.
pub async fn export_pdf(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ExportRequest>,
) -> AppResult<impl IntoResponse> {
    let prompts = fetch_selection(&state, &user, &input).await?;

    let bytes = pdf::render_prompts(&prompts)
        .map_err(|e| AppError::InternalError(format!("PDF rendering error: {e}")))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=prompts.pdf",
            ),
        ],
        bytes,
    ))
}

/// POST /export/notion
///
/// Push the selected prompts to the configured Notion database. 400 when
/// the integration is not configured.
pub async fn export_notion(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ExportRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let notion_config = state.config.notion.clone().ok_or_else(|| {
        AppError::BadRequest(
            "Notion not configured. Set NOTION_API_KEY and NOTION_DATABASE_ID.".into(),
        )
    })?;

    let prompts = fetch_selection(&state, &user, &input).await?;

    let client = NotionClient::new(notion_config);
    let exported = client.export_prompts(&prompts).await?;

    Ok(Json(json!({ "success": true, "exported": exported })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate the id selection and fetch the caller-owned prompts in it.
async fn fetch_selection(
    state: &AppState,
    user: &AuthUser,
    input: &ExportRequest,
) -> AppResult<Vec<Prompt>> {
    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids required".into()));
    }
    let prompts = PromptRepo::find_owned_by_ids(&state.pool, user.user_id, &input.ids).await?;
    Ok(prompts)
}
