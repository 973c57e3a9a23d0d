//! Main entry: init logging, validate config, build components, then run the
//! HTTP bridge alongside the Telegram REPL.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use crate::api::{self, TelegramSubscriptionChecker};
use crate::chain::HandlerChain;
use crate::config::GiveawayConfig;
use crate::contest::ContestService;
use crate::core::{init_tracing, Bot};
use crate::handlers::{AdminHandler, StartHandler, WebAppHandler};
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Wires the dispatch chain: /start, admin panel actions, mini-app payloads.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    service: Arc<ContestService>,
    config: Arc<GiveawayConfig>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(bot.clone(), config.clone())))
        .add_handler(Arc::new(AdminHandler::new(
            bot.clone(),
            service.clone(),
            config,
        )))
        .add_handler(Arc::new(WebAppHandler::new(bot, service)))
}

/// Runs the bot and the subscription-check API until shutdown.
pub async fn run(config: GiveawayConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        http_addr = %config.http_addr,
        admins = config.admin_ids.len(),
        "Initializing giveaway bot"
    );

    let db = storage::Database::connect(&config.database_url).await?;
    let service = Arc::new(ContestService::new(&db));
    let config = Arc::new(config);

    let mut bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(url) = &config.telegram_api_url {
        bot = bot.set_api_url(reqwest::Url::parse(url)?);
    }

    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = build_handler_chain(adapter.clone(), service, config.clone());

    let checker = Arc::new(TelegramSubscriptionChecker::new(bot.clone()));
    let http_addr = config.http_addr.clone();
    tokio::spawn(async move {
        if let Err(e) = api::serve(&http_addr, checker).await {
            error!(error = %e, "Subscription-check API stopped");
        }
    });

    info!("Bot started");
    run_repl(bot, adapter, chain).await
}
