//! Core types and traits: Handler, Bot, Message, keyboards, errors, logging.
//! Transport-agnostic; the teloxide mapping lives in [`crate::telegram`].

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{ContestError, GiveawayError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Keyboard, KeyboardButton, Message, MessageKind, ReplyMarkup,
    ToCoreMessage, ToCoreUser, User,
};
