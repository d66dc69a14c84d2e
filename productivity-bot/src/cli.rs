//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "productivity-bot")]
#[command(about = "Task, reminder and Pomodoro bot for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bot and the webhook listener (config from env; flags override BOT_TOKEN / PORT).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Load BotConfig from environment. `token` overrides BOT_TOKEN, `port` overrides PORT.
pub fn load_config(token: Option<String>, port: Option<u16>) -> Result<BotConfig> {
    BotConfig::load(token, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_without_flags() {
        let cli = Cli::try_parse_from(["productivity-bot", "run"]).unwrap();
        match cli.command {
            Commands::Run { token, port } => {
                assert!(token.is_none());
                assert!(port.is_none());
            }
        }
    }

    #[test]
    fn parses_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "productivity-bot",
            "run",
            "--token",
            "abc",
            "-p",
            "8080",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { token, port } => {
                assert_eq!(token.as_deref(), Some("abc"));
                assert_eq!(port, Some(8080));
            }
        }
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["productivity-bot", "run", "--port", "http"]).is_err());
    }
}
