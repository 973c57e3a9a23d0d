//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code
//! sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{
    ButtonRequest, ChatId, KeyboardButton as TgKeyboardButton, KeyboardMarkup, KeyboardRemove,
    ReplyMarkup as TgReplyMarkup, WebAppInfo,
};
use tracing::warn;

use crate::core::{Bot as CoreBot, Chat, GiveawayError, Keyboard, ReplyMarkup, Result};

/// Thin wrapper around teloxide::Bot implementing the core Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn to_teloxide_keyboard(keyboard: &Keyboard) -> KeyboardMarkup {
    let rows: Vec<Vec<TgKeyboardButton>> = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(to_teloxide_button).collect())
        .collect();

    let mut markup = KeyboardMarkup::new(rows);
    markup.resize_keyboard = keyboard.resize;
    markup
}

fn to_teloxide_button(button: &crate::core::KeyboardButton) -> TgKeyboardButton {
    let mut tg = TgKeyboardButton::new(button.label.clone());
    if let Some(url) = &button.web_app_url {
        // Config validation guarantees the web-app URL parses.
        match reqwest::Url::parse(url) {
            Ok(url) => tg = tg.request(ButtonRequest::WebApp(WebAppInfo { url })),
            Err(e) => warn!(url, error = %e, "Dropping web-app target with invalid URL"),
        }
    }
    tg
}

fn to_teloxide_markup(markup: &ReplyMarkup) -> TgReplyMarkup {
    match markup {
        ReplyMarkup::Keyboard(keyboard) => {
            TgReplyMarkup::Keyboard(to_teloxide_keyboard(keyboard))
        }
        ReplyMarkup::RemoveKeyboard => TgReplyMarkup::KeyboardRemove(KeyboardRemove::new()),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(|e| GiveawayError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_message_with_markup(
        &self,
        chat: &Chat,
        text: &str,
        markup: &ReplyMarkup,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .reply_markup(to_teloxide_markup(markup))
            .await
            .map_err(|e| GiveawayError::Transport(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyboardButton;

    #[test]
    fn test_keyboard_conversion_keeps_grid_shape() {
        let keyboard = Keyboard::new(vec![
            vec![KeyboardButton::new("a"), KeyboardButton::new("b")],
            vec![KeyboardButton::web_app("открыть", "https://example.com/app")],
        ]);

        let tg = to_teloxide_keyboard(&keyboard);
        assert_eq!(tg.keyboard.len(), 2);
        assert_eq!(tg.keyboard[0].len(), 2);
        assert_eq!(tg.keyboard[1].len(), 1);
        assert!(tg.resize_keyboard);
    }
}
