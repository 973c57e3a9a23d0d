//! Admin panel handler: exact-match button labels driving the contest
//! lifecycle. Admin actions are gated on the configured admin set.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::GiveawayConfig;
use crate::contest::ContestService;
use crate::core::{Bot, ContestError, Handler, HandlerResponse, Message, MessageKind, Result};

use super::{keyboards, labels, send_welcome};

pub struct AdminHandler {
    bot: Arc<dyn Bot>,
    service: Arc<ContestService>,
    config: Arc<GiveawayConfig>,
}

impl AdminHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        service: Arc<ContestService>,
        config: Arc<GiveawayConfig>,
    ) -> Self {
        Self {
            bot,
            service,
            config,
        }
    }

    fn ensure_admin(&self, message: &Message) -> Result<()> {
        if self.config.is_admin(message.user.id) {
            Ok(())
        } else {
            warn!(user_id = message.user.id, "Admin action denied");
            Err(ContestError::Unauthorized.into())
        }
    }

    async fn show_panel(&self, message: &Message) -> Result<()> {
        self.bot
            .send_message_with_markup(
                &message.chat,
                "👨‍💻 Admin panel:",
                &keyboards::admin_keyboard(),
            )
            .await
    }

    async fn start_contest(&self, message: &Message) -> Result<()> {
        self.service.start().await?;
        self.bot.reply_to(message, "✅ Contest started!").await
    }

    async fn stop_contest(&self, message: &Message) -> Result<()> {
        let outcome = self.service.stop().await?;
        if let Some(winner) = outcome.winner {
            let text = format!(
                "🏆 Winner: @{}\nID: {}",
                winner.username.as_deref().unwrap_or("unknown"),
                winner.user_id
            );
            self.bot.reply_to(message, &text).await?;
        }
        self.bot.reply_to(message, "✅ Contest finished").await
    }

    async fn show_stats(&self, message: &Message) -> Result<()> {
        let stats = self.service.stats().await?;
        let text = format!(
            "📊 Stats:\n\n• Active contest: {}\n• Participants: {}",
            if stats.active { "✅ yes" } else { "❌ no" },
            stats.participants
        );
        self.bot.reply_to(message, &text).await
    }
}

#[async_trait]
impl Handler for AdminHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind != MessageKind::Text {
            return Ok(HandlerResponse::Continue);
        }

        match message.content.as_str() {
            labels::ADMIN_PANEL => {
                self.ensure_admin(message)?;
                info!(user_id = message.user.id, "Showing admin panel");
                self.show_panel(message).await?;
            }
            labels::START_CONTEST => {
                self.ensure_admin(message)?;
                self.start_contest(message).await?;
            }
            labels::STOP_CONTEST => {
                self.ensure_admin(message)?;
                self.stop_contest(message).await?;
            }
            labels::STATS => {
                self.ensure_admin(message)?;
                self.show_stats(message).await?;
            }
            labels::BACK => {
                send_welcome(&self.bot, &self.config, message).await?;
            }
            _ => return Ok(HandlerResponse::Continue),
        }

        Ok(HandlerResponse::Stop)
    }
}
