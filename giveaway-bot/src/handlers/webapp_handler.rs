//! Mini-app payload handler: parses the structured JSON sent back by the
//! web app and registers participation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::contest::ContestService;
use crate::core::{
    Bot, ContestError, Handler, HandlerResponse, Message, MessageKind, ReplyMarkup, Result,
};

/// Minimum payload shape; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct WebAppPayload {
    action: String,
}

pub struct WebAppHandler {
    bot: Arc<dyn Bot>,
    service: Arc<ContestService>,
}

impl WebAppHandler {
    pub fn new(bot: Arc<dyn Bot>, service: Arc<ContestService>) -> Self {
        Self { bot, service }
    }
}

#[async_trait]
impl Handler for WebAppHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::WebAppData {
            return Ok(HandlerResponse::Continue);
        }

        let payload: WebAppPayload = serde_json::from_str(&message.content)
            .map_err(|e| ContestError::MalformedPayload(e.to_string()))?;

        // Only "participate" is recognized; anything else is dropped silently.
        if payload.action != "participate" {
            debug!(
                user_id = message.user.id,
                action = %payload.action,
                "Ignoring unknown mini-app action"
            );
            return Ok(HandlerResponse::Stop);
        }

        self.service
            .register_participant(
                message.user.id,
                message.user.username.clone(),
                message.user.full_name.clone(),
            )
            .await?;

        info!(user_id = message.user.id, "Mini-app participation recorded");
        self.bot
            .send_message_with_markup(
                &message.chat,
                "🎉 You are in the giveaway!",
                &ReplyMarkup::RemoveKeyboard,
            )
            .await?;
        Ok(HandlerResponse::Stop)
    }
}
