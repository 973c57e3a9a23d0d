//! Contest record model for persistence.
//!
//! Maps to the `contests` table and is used by ContestRepository.

use serde::{Deserialize, Serialize};

/// One giveaway round. At most one row is active at any time; the partial
/// unique index on `contests(is_active)` enforces this in the database.
///
/// `winner_id` holds the winner's external user id, set when the contest is
/// stopped with at least one participant. It references `users.user_id`
/// informally; no foreign key is declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContestRecord {
    pub id: i64,
    pub is_active: bool,
    pub winner_id: Option<i64>,
}
