//! Repository for the `users` table, including the admin aggregation
//! queries and the cascading account deletion.

use promptvault_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User, UserSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

/// Provides CRUD and aggregation operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate email violates `uq_users_email`; callers pre-check with
    /// [`UserRepo::find_by_email`] and the constraint is the backstop.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by normalized email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Count non-admin accounts.
    pub async fn count_members(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role <> 'admin'")
            .fetch_one(pool)
            .await
    }

    /// For every non-admin user: email, name, and how many of their prompts
    /// are currently public. Sorted by share count descending, then email.
    pub async fn members_with_share_counts(pool: &PgPool) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT u.email, u.name,
                    COUNT(p.id) FILTER (WHERE p.is_public) AS shared_prompt_count
             FROM users u
             LEFT JOIN prompts p ON p.owner_id = u.id
             WHERE u.role <> 'admin'
             GROUP BY u.id, u.email, u.name
             ORDER BY shared_prompt_count DESC, u.email ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a user and everything that references them, atomically.
    ///
    /// One transaction, three steps, in this order:
    /// 1. strip the user from every prompt's `liked_by` and recount `likes`
    /// 2. delete every prompt the user owns
    /// 3. delete the user row
    ///
    /// Returns `false` (after rolling back nothing of consequence) when the
    /// user no longer exists. Any step failing aborts the whole cascade.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let likes_stripped = sqlx::query(
            "UPDATE prompts
             SET liked_by = array_remove(liked_by, $1),
                 likes    = cardinality(array_remove(liked_by, $1))
             WHERE liked_by @> ARRAY[$1]",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let prompts_deleted = sqlx::query("DELETE FROM prompts WHERE owner_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let users_deleted = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::debug!(
            user_id = id,
            likes_stripped,
            prompts_deleted,
            "cascading user deletion committed"
        );

        Ok(users_deleted > 0)
    }
}
