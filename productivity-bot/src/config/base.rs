//! Base config: Telegram connection, logging, webhook listener. Loaded from env.

use anyhow::{bail, Context, Result};
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/productivity-bot.log";

/// Base config: Telegram-related, logging, and the webhook port.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN, or the alternate TELEGRAM_BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// PORT for the webhook listener
    pub port: u16,
}

impl BaseConfig {
    /// Load from environment variables. `token` and `port` override BOT_TOKEN and PORT when given.
    pub fn load(token: Option<String>, port: Option<u16>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("TELEGRAM_BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN (or TELEGRAM_BOT_TOKEN) not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let port = match port {
            Some(port) => port,
            None => match env::var("PORT") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT is not a valid port number: {}", raw))?,
                Err(_) => webhook::DEFAULT_PORT,
            },
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            port,
        })
    }

    /// Validate config: token must be non-empty; telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
