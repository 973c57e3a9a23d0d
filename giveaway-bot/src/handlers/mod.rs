//! Dispatch handlers: /start entry, admin panel actions, mini-app payloads.

mod admin_handler;
mod keyboards;
mod start_handler;
mod webapp_handler;

pub use admin_handler::AdminHandler;
pub use keyboards::{admin_entry_keyboard, admin_keyboard, entry_keyboard};
pub use start_handler::StartHandler;
pub use webapp_handler::WebAppHandler;

/// Exact-match button labels used across the keyboards and handlers.
pub mod labels {
    pub const OPEN_MINI_APP: &str = "Open Mini App";
    pub const ADMIN_PANEL: &str = "Admin panel";
    pub const START_CONTEST: &str = "🔄 Start contest";
    pub const STOP_CONTEST: &str = "⏹ Stop contest";
    pub const STATS: &str = "📊 Stats";
    pub const BACK: &str = "🔙 Back";
}

pub(crate) const WELCOME_TEXT: &str = "Welcome to the giveaway bot! 🎉";

use std::sync::Arc;

use crate::config::GiveawayConfig;
use crate::core::{Bot, Message, Result};

/// Sends the welcome reply with the entry keyboard, or the admin-panel trigger
/// keyboard when the caller is an admin. Used by /start and the Back button.
/// The lifecycle buttons only appear after the panel button is pressed.
pub(crate) async fn send_welcome(
    bot: &Arc<dyn Bot>,
    config: &GiveawayConfig,
    message: &Message,
) -> Result<()> {
    let markup = if config.is_admin(message.user.id) {
        keyboards::admin_entry_keyboard()
    } else {
        keyboards::entry_keyboard(&config.webapp_url)
    };
    bot.send_message_with_markup(&message.chat, WELCOME_TEXT, &markup)
        .await
}
