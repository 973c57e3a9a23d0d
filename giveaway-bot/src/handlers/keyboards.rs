//! Keyboard builders for the entry and admin reply keyboards.

use crate::core::{Keyboard, KeyboardButton, ReplyMarkup};

use super::labels;

/// Entry keyboard: a single button launching the mini-application.
pub fn entry_keyboard(webapp_url: &str) -> ReplyMarkup {
    ReplyMarkup::Keyboard(Keyboard::new(vec![vec![KeyboardButton::web_app(
        labels::OPEN_MINI_APP,
        webapp_url,
    )]]))
}

/// Admin entry keyboard: a single button opening the admin panel. Admins get
/// this instead of the mini-app button on /start.
pub fn admin_entry_keyboard() -> ReplyMarkup {
    ReplyMarkup::Keyboard(Keyboard::new(vec![vec![KeyboardButton::new(
        labels::ADMIN_PANEL,
    )]]))
}

/// Admin panel keyboard: lifecycle controls, two buttons per row.
pub fn admin_keyboard() -> ReplyMarkup {
    ReplyMarkup::Keyboard(Keyboard::new(vec![
        vec![
            KeyboardButton::new(labels::START_CONTEST),
            KeyboardButton::new(labels::STOP_CONTEST),
        ],
        vec![
            KeyboardButton::new(labels::STATS),
            KeyboardButton::new(labels::BACK),
        ],
    ]))
}
