//! BotConfig: BaseConfig + ProductivityConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, ProductivityConfig};

/// Full bot config. Call validate() after load() to fail fast before startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub productivity: ProductivityConfig,
}

impl BotConfig {
    /// Load full config from environment variables; CLI `token`/`port` take precedence.
    pub fn load(token: Option<String>, port: Option<u16>) -> Result<Self> {
        let base = BaseConfig::load(token, port)?;
        let productivity = ProductivityConfig::from_env()?;
        Ok(Self { base, productivity })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.productivity.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn port(&self) -> u16 {
        self.base.port
    }
    pub fn pomodoro_default_minutes(&self) -> u64 {
        self.productivity.pomodoro_default_minutes
    }
}
