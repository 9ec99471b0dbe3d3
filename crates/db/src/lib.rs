//! Persistence layer for the PromptVault backend.
//!
//! Owns the connection pool, migrations, entity models, and repositories.
//! The pool is constructed once at startup by the API crate and passed into
//! every repository call -- there is no ambient global database handle.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// How long to wait for a connection before giving up.
///
/// Bounds both startup (first connect) and per-request pool acquisition so
/// a dead database surfaces as a timely error instead of a hang.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum pooled connections, shared by all request handlers.
const MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
