//! Database handle: SQLite pool, schema initialization, repository accessors.

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::info;

use crate::contest_repo::ContestRepository;
use crate::error::StorageError;
use crate::user_repo::UserRepository;

/// Owns the SQLite pool; creates the database file if missing and ensures the
/// schema exists before handing out repositories.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the database at the given URL (e.g. `sqlite:contest.db` or
    /// `sqlite::memory:`) and initializes the schema.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        info!(database_url, "Opening SQLite database");

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Each pooled connection to an in-memory URL gets its own private
        // database; a single connection keeps it one shared store.
        let mut pool_options = SqlitePoolOptions::new();
        if database_url.contains(":memory:") {
            pool_options = pool_options.max_connections(1);
        }
        let pool = pool_options.connect_with(options).await?;

        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL UNIQUE,
                username TEXT,
                full_name TEXT,
                is_subscribed INTEGER NOT NULL DEFAULT 0,
                is_participated INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contests (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                is_active INTEGER NOT NULL DEFAULT 1,
                winner_id INTEGER
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // At most one active contest, enforced at the database level.
        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_contests_active
            ON contests(is_active) WHERE is_active = 1
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Database schema ready");
        Ok(())
    }

    /// Returns a repository for the `users` table.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    /// Returns a repository for the `contests` table.
    pub fn contests(&self) -> ContestRepository {
        ContestRepository::new(self.pool.clone())
    }
}
