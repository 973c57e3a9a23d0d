//! # Giveaway bot
//!
//! Telegram bot with a companion mini-application for single-winner giveaway
//! contests. Wires the contest lifecycle service over `storage`, the handler
//! chain for inbound updates, the teloxide transport, and the axum HTTP bridge
//! for subscription checks.

pub mod api;
pub mod chain;
pub mod cli;
pub mod config;
pub mod contest;
pub mod core;
pub mod handlers;
pub mod presentation;
pub mod runner;
pub mod telegram;

pub use chain::HandlerChain;
pub use cli::{Cli, Commands};
pub use config::GiveawayConfig;
pub use contest::{ContestService, ContestStats, StopOutcome};
pub use core::{
    init_tracing, Bot, Chat, ContestError, GiveawayError, Handler, HandlerResponse, Keyboard,
    KeyboardButton, Message, MessageKind, ReplyMarkup, Result, ToCoreMessage, ToCoreUser, User,
};
pub use handlers::{AdminHandler, StartHandler, WebAppHandler};
pub use runner::{build_handler_chain, run};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
