//! Binary for the giveaway bot: Telegram dispatch plus the subscription-check
//! API.

use anyhow::Result;
use clap::Parser;
use giveaway_bot::{run, Cli, Commands, GiveawayConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = GiveawayConfig::load(token)?;
            run(config).await
        }
    }
}
