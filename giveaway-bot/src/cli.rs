//! CLI for the giveaway-bot binary.

use clap::{Parser, Subcommand};

/// Root CLI: holds a single subcommand. Parsed by `main.rs`.
#[derive(Parser)]
#[command(name = "giveaway-bot")]
#[command(about = "Telegram giveaway bot: contest lifecycle, mini-app participation, subscription check API.")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot and the HTTP bridge.
    Run {
        /// Bot token; falls back to BOT_TOKEN from the environment.
        #[arg(short, long)]
        token: Option<String>,
    },
}
