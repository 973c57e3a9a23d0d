//! Keyboard description types for outbound replies.
//!
//! A keyboard is an ordered grid of labelled buttons; a button may carry a
//! web-app launch target. The teloxide mapping lives in the transport layer.

use serde::{Deserialize, Serialize};

/// One reply button. When `web_app_url` is set, pressing the button launches
/// the mini-application at that URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub label: String,
    pub web_app_url: Option<String>,
}

impl KeyboardButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            web_app_url: None,
        }
    }

    pub fn web_app(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            web_app_url: Some(url.into()),
        }
    }
}

/// Ordered rows of buttons shown under the input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<KeyboardButton>>,
    pub resize: bool,
}

impl Keyboard {
    pub fn new(rows: Vec<Vec<KeyboardButton>>) -> Self {
        Self { rows, resize: true }
    }
}

/// Markup attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReplyMarkup {
    Keyboard(Keyboard),
    RemoveKeyboard,
}
