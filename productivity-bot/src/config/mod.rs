//! Bot configuration: [`BaseConfig`] (Telegram, log file, webhook port) + [`ProductivityConfig`] (command defaults).

mod base;
mod bot_config;
mod productivity;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use productivity::ProductivityConfig;
