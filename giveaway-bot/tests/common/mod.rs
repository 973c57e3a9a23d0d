//! Shared helpers for dispatch integration tests.

pub mod mock_bot;

use std::collections::HashSet;
use std::sync::Arc;

use giveaway_bot::{
    build_handler_chain, Chat, ContestService, GiveawayConfig, HandlerChain, Message, MessageKind,
    User,
};
use storage::Database;

use mock_bot::MockBot;

pub const ADMIN_ID: i64 = 527228466;

pub fn test_config() -> GiveawayConfig {
    GiveawayConfig {
        bot_token: "test-token".to_string(),
        channel_username: "giveaway_channel".to_string(),
        webapp_url: "https://example.com/giveaway/".to_string(),
        admin_ids: HashSet::from([ADMIN_ID]),
        database_url: "sqlite::memory:".to_string(),
        http_addr: "127.0.0.1:8080".to_string(),
        log_file: "logs/test.log".to_string(),
        telegram_api_url: None,
    }
}

/// Builds the full dispatch chain over an in-memory database and a recording
/// mock bot.
pub async fn test_chain() -> (HandlerChain, Arc<MockBot>, Arc<ContestService>) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    let service = Arc::new(ContestService::new(&db));
    let bot = MockBot::new();
    let chain = build_handler_chain(bot.clone(), service.clone(), Arc::new(test_config()));
    (chain, bot, service)
}

pub fn text_message(user_id: i64, text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: user_id,
            username: Some(format!("user{user_id}")),
            full_name: Some(format!("User {user_id}")),
        },
        chat: Chat { id: user_id },
        kind: MessageKind::Text,
        content: text.to_string(),
        created_at: chrono::Utc::now(),
    }
}

pub fn webapp_message(user_id: i64, payload: &str) -> Message {
    Message {
        kind: MessageKind::WebAppData,
        content: payload.to_string(),
        ..text_message(user_id, "")
    }
}
