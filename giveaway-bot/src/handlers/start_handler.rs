//! /start command handler: presents the entry (or admin) keyboard.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::GiveawayConfig;
use crate::core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result};

use super::send_welcome;

pub struct StartHandler {
    bot: Arc<dyn Bot>,
    config: Arc<GiveawayConfig>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, config: Arc<GiveawayConfig>) -> Self {
        Self { bot, config }
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::Text || message.content != "/start" {
            return Ok(HandlerResponse::Continue);
        }

        info!(user_id = message.user.id, "Handling /start");
        send_welcome(&self.bot, &self.config, message).await?;
        Ok(HandlerResponse::Stop)
    }
}
