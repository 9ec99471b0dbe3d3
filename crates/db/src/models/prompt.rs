//! Prompt entity model and DTOs.

use promptvault_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full prompt row from the `prompts` table.
///
/// Serialized directly in API responses (camelCase field names are the
/// client contract). `likes` always equals `liked_by.len()`; the pair is
/// only ever written together in a single statement.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub text: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub folder: Option<String>,
    pub is_public: bool,
    pub likes: i32,
    pub liked_by: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new prompt. `owner_id` always comes from the
/// authenticated caller, never from the request body.
#[derive(Debug)]
pub struct CreatePrompt {
    pub owner_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub text: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub folder: Option<String>,
}

/// DTO for updating an existing prompt. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdatePrompt {
    pub title: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub folder: Option<String>,
    pub is_public: Option<bool>,
}

/// Filters for the owner-scoped prompt listing.
///
/// `tag`/`folder`/`category` are exact matches; `q` is a full-text search
/// over title/description/text.
#[derive(Debug, Default)]
pub struct PromptFilters {
    pub q: Option<String>,
    pub tag: Option<String>,
    pub folder: Option<String>,
    pub category: Option<String>,
}

/// Sort order for the public community feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicSort {
    /// Like count descending, ties broken by most recent update.
    Trending,
    /// Creation time descending.
    New,
}

impl PublicSort {
    /// Parse the `?sort=` query value. Anything other than `new` falls back
    /// to trending, matching the feed's default.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("new") => PublicSort::New,
            _ => PublicSort::Trending,
        }
    }
}

/// Outcome of an atomic like attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// The like was recorded; carries the new like count.
    Liked(i32),
    /// The caller already liked this prompt.
    AlreadyLiked,
    /// No public prompt with that id (private prompts are indistinguishable
    /// from missing ones).
    NotFound,
}
