//! Repository for the `prompts` table.
//!
//! Every owner-scoped query filters on `owner_id` in the same WHERE clause
//! as the id, so "exists but belongs to someone else" and "does not exist"
//! are indistinguishable to callers. Like/unlike are single atomic UPDATEs
//! that rewrite `liked_by` and `likes` together; the row lock taken by the
//! UPDATE serializes concurrent calls on the same prompt.

use promptvault_core::types::DbId;
use sqlx::PgPool;

use crate::models::prompt::{
    CreatePrompt, LikeOutcome, Prompt, PromptFilters, PublicSort, UpdatePrompt,
};

/// Column list shared across queries to avoid repetition. Excludes the
/// generated `search_vec` column, which never leaves the database.
const COLUMNS: &str = "id, owner_id, title, description, text, tags, category, \
                       folder, is_public, likes, liked_by, created_at, updated_at";

/// Hard cap on the public community feed.
const PUBLIC_FEED_LIMIT: i64 = 50;

/// Provides CRUD, feed, and like-state operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    // -----------------------------------------------------------------------
    // Owner-scoped CRUD
    // -----------------------------------------------------------------------

    /// Insert a new prompt, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePrompt) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (owner_id, title, description, text, tags, category, folder)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(input.owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.text)
            .bind(&input.tags)
            .bind(&input.category)
            .bind(&input.folder)
            .fetch_one(pool)
            .await
    }

    /// List the caller's prompts, most recently updated first.
    ///
    /// One static query: each filter collapses to TRUE when its bind is
    /// NULL, so any combination of `q`/`tag`/`folder`/`category` works
    /// without dynamic SQL.
    pub async fn list_owned(
        pool: &PgPool,
        owner_id: DbId,
        filters: &PromptFilters,
    ) -> Result<Vec<Prompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompts
             WHERE owner_id = $1
               AND ($2::text IS NULL OR $2 = ANY(tags))
               AND ($3::text IS NULL OR folder = $3)
               AND ($4::text IS NULL OR category = $4)
               AND ($5::text IS NULL
                    OR search_vec @@ websearch_to_tsquery('english', $5))
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(owner_id)
            .bind(&filters.tag)
            .bind(&filters.folder)
            .bind(&filters.category)
            .bind(&filters.q)
            .fetch_all(pool)
            .await
    }

    /// Find a prompt owned by the caller. `None` covers both "missing" and
    /// "owned by someone else".
    pub async fn find_owned(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the caller's prompts among the given ids (export selection).
    /// Ids owned by other users are silently dropped.
    pub async fn find_owned_by_ids(
        pool: &PgPool,
        owner_id: DbId,
        ids: &[DbId],
    ) -> Result<Vec<Prompt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prompts
             WHERE owner_id = $1 AND id = ANY($2)
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(owner_id)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Update a prompt owned by the caller. Only non-`None` fields in
    /// `input` are applied. Returns `None` under the same ownership rule
    /// as [`PromptRepo::find_owned`].
    pub async fn update_owned(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdatePrompt,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET
                title       = COALESCE($3, title),
                description = COALESCE($4, description),
                text        = COALESCE($5, text),
                tags        = COALESCE($6, tags),
                category    = COALESCE($7, category),
                folder      = COALESCE($8, folder),
                is_public   = COALESCE($9, is_public)
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.text)
            .bind(&input.tags)
            .bind(&input.category)
            .bind(&input.folder)
            .bind(input.is_public)
            .fetch_optional(pool)
            .await
    }

    /// Delete a prompt owned by the caller. Returns `true` if a row was
    /// deleted; repeating the call yields `false` again (same outcome).
    pub async fn delete_owned(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Community feed
    // -----------------------------------------------------------------------

    /// Toggle a prompt's public visibility, owner-scoped.
    pub async fn set_visibility(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        is_public: bool,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!(
            "UPDATE prompts SET is_public = $3
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(is_public)
            .fetch_optional(pool)
            .await
    }

    /// List public prompts, capped at 50 rows, no identity required.
    pub async fn list_public(
        pool: &PgPool,
        q: Option<&str>,
        tag: Option<&str>,
        sort: PublicSort,
    ) -> Result<Vec<Prompt>, sqlx::Error> {
        let order_by = match sort {
            PublicSort::New => "created_at DESC",
            PublicSort::Trending => "likes DESC, updated_at DESC",
        };
        let query = format!(
            "SELECT {COLUMNS} FROM prompts
             WHERE is_public
               AND ($1::text IS NULL OR $1 = ANY(tags))
               AND ($2::text IS NULL
                    OR search_vec @@ websearch_to_tsquery('english', $2))
             ORDER BY {order_by}
             LIMIT $3"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(tag)
            .bind(q)
            .bind(PUBLIC_FEED_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Count public prompts (admin stats).
    pub async fn count_public(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM prompts WHERE is_public")
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Likes
    // -----------------------------------------------------------------------

    /// Record a like, atomically.
    ///
    /// A single UPDATE appends the user and recounts in one statement; it
    /// only matches when the prompt is public and the user is not already
    /// in `liked_by`, so two concurrent likes can never produce a lost
    /// update. A non-matching update is classified with one follow-up read.
    pub async fn like(pool: &PgPool, id: DbId, user_id: DbId) -> Result<LikeOutcome, sqlx::Error> {
        let likes: Option<i32> = sqlx::query_scalar(
            "UPDATE prompts
             SET liked_by = array_append(liked_by, $2),
                 likes    = cardinality(liked_by) + 1
             WHERE id = $1 AND is_public AND NOT (liked_by @> ARRAY[$2])
             RETURNING likes",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        if let Some(likes) = likes {
            return Ok(LikeOutcome::Liked(likes));
        }

        // Classify the miss: already liked, or no public prompt at all.
        let already: Option<bool> = sqlx::query_scalar(
            "SELECT liked_by @> ARRAY[$2]
             FROM prompts
             WHERE id = $1 AND is_public",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        match already {
            Some(true) => Ok(LikeOutcome::AlreadyLiked),
            _ => Ok(LikeOutcome::NotFound),
        }
    }

    /// Remove a like, atomically. Removing a non-member is a no-op that
    /// still returns the current count. `None` means no public prompt with
    /// that id exists.
    pub async fn unlike(pool: &PgPool, id: DbId, user_id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE prompts
             SET liked_by = array_remove(liked_by, $2),
                 likes    = cardinality(array_remove(liked_by, $2))
             WHERE id = $1 AND is_public
             RETURNING likes",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}
