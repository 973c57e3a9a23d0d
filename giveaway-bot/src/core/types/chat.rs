//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat the message arrived in; replies go back to the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}
