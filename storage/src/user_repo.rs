//! User repository: persistence and filtered queries for the `users` table.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{is_unique_violation, StorageError};
use crate::models::UserRecord;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new user row. Fails with [`StorageError::DuplicateUser`] when
    /// a row with the same `user_id` already exists.
    pub async fn create(&self, user: &UserRecord) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, username, full_name, is_subscribed, is_participated)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.user_id)
        .bind(&user.username)
        .bind(&user.full_name)
        .bind(user.is_subscribed)
        .bind(user.is_participated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::DuplicateUser(user.user_id)
            } else {
                e.into()
            }
        })?;

        debug!(user_id = user.user_id, "User created");
        Ok(())
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Option<UserRecord>, StorageError> {
        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Persists mutated fields of an existing user, keyed by `user_id`.
    pub async fn update(&self, user: &UserRecord) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            UPDATE users
            SET username = ?, full_name = ?, is_subscribed = ?, is_participated = ?
            WHERE user_id = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.full_name)
        .bind(user.is_subscribed)
        .bind(user.is_participated)
        .bind(user.user_id)
        .execute(&self.pool)
        .await?;

        debug!(user_id = user.user_id, "User updated");
        Ok(())
    }

    pub async fn count_participants(&self) -> Result<i64, StorageError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE is_participated = 1")
                .fetch_one(&self.pool)
                .await?;
        Ok(count.0)
    }

    pub async fn list_participants(&self) -> Result<Vec<UserRecord>, StorageError> {
        let users = sqlx::query_as::<_, UserRecord>(
            "SELECT * FROM users WHERE is_participated = 1 ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }
}
