//! Conversions from teloxide types to the core model.

use crate::core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};

/// Converts a teloxide user to a core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            full_name: Some(self.0.full_name()),
        }
    }
}

/// Converts a teloxide message to a core [`Message`]. Mini-app payloads map to
/// [`MessageKind::WebAppData`] with the raw JSON as content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        let (kind, content) = match self.0.web_app_data() {
            Some(data) => (MessageKind::WebAppData, data.data.clone()),
            None => (
                MessageKind::Text,
                self.0.text().unwrap_or("").to_string(),
            ),
        };

        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    full_name: None,
                }),
            chat: Chat { id: self.0.chat.id.0 },
            kind,
            content,
            created_at: chrono::Utc::now(),
        }
    }
}
