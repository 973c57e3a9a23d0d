//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (external id plus optional display metadata).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub full_name: Option<String>,
}
