//! Contest repository: persistence for the `contests` table.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageError;
use crate::models::ContestRecord;

#[derive(Clone)]
pub struct ContestRepository {
    pool: SqlitePool,
}

impl ContestRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the contest with `is_active = 1`, if any. The partial unique
    /// index guarantees at most one match.
    pub async fn find_active(&self) -> Result<Option<ContestRecord>, StorageError> {
        let contest =
            sqlx::query_as::<_, ContestRecord>("SELECT * FROM contests WHERE is_active = 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(contest)
    }

    /// Inserts a new active contest and returns it. Fails when an active
    /// contest already exists (unique index violation).
    pub async fn create_active(&self) -> Result<ContestRecord, StorageError> {
        let result = sqlx::query("INSERT INTO contests (is_active) VALUES (1)")
            .execute(&self.pool)
            .await?;

        let contest = ContestRecord {
            id: result.last_insert_rowid(),
            is_active: true,
            winner_id: None,
        };
        debug!(contest_id = contest.id, "Contest created");
        Ok(contest)
    }

    /// Persists mutated fields (deactivation, winner assignment).
    pub async fn update(&self, contest: &ContestRecord) -> Result<(), StorageError> {
        sqlx::query("UPDATE contests SET is_active = ?, winner_id = ? WHERE id = ?")
            .bind(contest.is_active)
            .bind(contest.winner_id)
            .bind(contest.id)
            .execute(&self.pool)
            .await?;

        debug!(contest_id = contest.id, "Contest updated");
        Ok(())
    }
}
