//! Giveaway bot configuration, loaded once from environment variables into an
//! immutable object passed explicitly to the components that need it.
//!
//! Defaults are for development only; production deployments must override
//! them. `BOT_TOKEN` has no default.

use std::collections::HashSet;
use std::env;

use anyhow::{Context, Result};

/// Immutable runtime configuration.
#[derive(Debug, Clone)]
pub struct GiveawayConfig {
    /// BOT_TOKEN (required).
    pub bot_token: String,
    /// CHANNEL_USERNAME: channel (without `@`) used by the subscription check
    /// mini-app flow.
    pub channel_username: String,
    /// WEBAPP_URL: base URL of the companion mini-application.
    pub webapp_url: String,
    /// ADMIN_IDS: JSON array of admin user ids.
    pub admin_ids: HashSet<i64>,
    /// DATABASE_URL for the SQLite store.
    pub database_url: String,
    /// HTTP_ADDR the subscription-check API listens on.
    pub http_addr: String,
    /// LOG_FILE path.
    pub log_file: String,
    /// Optional Telegram Bot API base URL override (TELEGRAM_API_URL), used to
    /// point requests at a mock server in tests.
    pub telegram_api_url: Option<String>,
}

impl GiveawayConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN when set.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let channel_username =
            env::var("CHANNEL_USERNAME").unwrap_or_else(|_| "giveaway_channel".to_string());
        let webapp_url =
            env::var("WEBAPP_URL").unwrap_or_else(|_| "https://example.com/giveaway/".to_string());
        let admin_ids_json = env::var("ADMIN_IDS").unwrap_or_else(|_| "[]".to_string());
        let admin_ids: Vec<i64> = serde_json::from_str(&admin_ids_json)
            .context("ADMIN_IDS must be a JSON array of integers")?;
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:contest.db".to_string());
        let http_addr = env::var("HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/giveaway-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL").ok();

        Ok(Self {
            bot_token,
            channel_username,
            webapp_url,
            admin_ids: admin_ids.into_iter().collect(),
            database_url,
            http_addr,
            log_file,
            telegram_api_url,
        })
    }

    /// Validates URL and address fields so startup fails early on bad config.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.webapp_url).is_err() {
            anyhow::bail!("WEBAPP_URL is not a valid URL: {}", self.webapp_url);
        }
        if let Some(ref url) = self.telegram_api_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("TELEGRAM_API_URL is set but not a valid URL: {}", url);
            }
        }
        self.http_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("HTTP_ADDR is not a valid socket address: {}", self.http_addr))?;
        Ok(())
    }

    /// Set-membership check against the configured admin list.
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}
