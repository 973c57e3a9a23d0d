//! Channel-membership lookup behind a trait so the HTTP handler can be tested
//! without Telegram.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{Recipient, UserId};

use crate::core::{GiveawayError, Result};

/// Checks whether a user counts as subscribed to a channel.
#[async_trait]
pub trait SubscriptionChecker: Send + Sync {
    async fn is_subscribed(&self, channel: &str, user_id: i64) -> Result<bool>;
}

/// Production checker using the bot's own privileged `getChatMember` call.
pub struct TelegramSubscriptionChecker {
    bot: teloxide::Bot,
}

impl TelegramSubscriptionChecker {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl SubscriptionChecker for TelegramSubscriptionChecker {
    async fn is_subscribed(&self, channel: &str, user_id: i64) -> Result<bool> {
        let user_id = u64::try_from(user_id)
            .map_err(|_| GiveawayError::Transport(format!("invalid user id: {user_id}")))?;
        let chat = Recipient::ChannelUsername(format!("@{channel}"));
        let member = self
            .bot
            .get_chat_member(chat, UserId(user_id))
            .await
            .map_err(|e| GiveawayError::Transport(e.to_string()))?;

        // Subscribed means member, administrator, or owner; restricted, left,
        // and banned do not count.
        Ok(member.kind.is_owner() || member.kind.is_administrator() || member.kind.is_member())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_negative_user_id_rejected_before_the_api_call() {
        let checker = TelegramSubscriptionChecker::new(teloxide::Bot::new("123:test"));

        let err = checker
            .is_subscribed("giveaway_channel", -5)
            .await
            .expect_err("Negative ids must be rejected");
        assert!(matches!(err, GiveawayError::Transport(_)));
        assert!(err.to_string().contains("-5"));
    }
}
