//! Bot abstraction for sending replies.
//!
//! The [`Bot`] trait is transport-agnostic; production code uses the teloxide
//! adapter in [`crate::telegram`], tests substitute a recording mock.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::{Chat, Message, ReplyMarkup};

/// Abstraction for sending messages, optionally with keyboard markup.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message with the given keyboard markup.
    async fn send_message_with_markup(
        &self,
        chat: &Chat,
        text: &str,
        markup: &ReplyMarkup,
    ) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
