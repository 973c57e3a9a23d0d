//! Transport-agnostic message, user, chat, keyboard, and handler types.

mod chat;
mod handler;
mod keyboard;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use keyboard::{Keyboard, KeyboardButton, ReplyMarkup};
pub use message::{Message, MessageKind};
pub use response::HandlerResponse;
pub use user::User;
