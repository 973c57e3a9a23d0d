//! Mock implementation of [`giveaway_bot::Bot`] for integration tests.
//!
//! Records every outbound message (text plus optional markup) so tests can
//! assert on replies and keyboards without hitting Telegram.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use giveaway_bot::{Bot, Chat, ReplyMarkup, Result};

/// One recorded outbound message.
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub markup: Option<ReplyMarkup>,
}

/// Recording Bot; tests read back everything that was "sent".
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentMessage>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of all messages sent so far, in order.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            markup: None,
        });
        Ok(())
    }

    async fn send_message_with_markup(
        &self,
        chat: &Chat,
        text: &str,
        markup: &ReplyMarkup,
    ) -> Result<()> {
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            markup: Some(markup.clone()),
        });
        Ok(())
    }
}
