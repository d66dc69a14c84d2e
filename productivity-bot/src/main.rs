//! Binary for the productivity bot.

use anyhow::Result;
use clap::Parser;
use productivity_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, port } => {
            let config = load_config(token, port)?;
            run_bot(config).await
        }
    }
}
