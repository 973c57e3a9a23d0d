//! Message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Shape of an inbound interaction: plain text (commands and button labels)
/// or a structured payload sent back by the mini-application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    WebAppData,
}

/// A single inbound message. For [`MessageKind::WebAppData`], `content` holds
/// the raw JSON payload from the mini-application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub kind: MessageKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
