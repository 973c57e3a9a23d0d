//! User record model for persistence.
//!
//! Maps to the `users` table and is used by UserRepository.

use serde::{Deserialize, Serialize};

/// A chat participant. `user_id` is the external Telegram identity (unique);
/// `id` is the surrogate key assigned by the database (0 until stored).
///
/// `is_participated` is a global flag: it marks opt-in to the current or most
/// recent contest and is never reset when a new contest starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub user_id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub is_subscribed: bool,
    pub is_participated: bool,
}

impl UserRecord {
    /// Creates a record for a not-yet-stored user with both flags cleared.
    pub fn new(user_id: i64, username: Option<String>, full_name: Option<String>) -> Self {
        Self {
            id: 0,
            user_id,
            username,
            full_name,
            is_subscribed: false,
            is_participated: false,
        }
    }
}
