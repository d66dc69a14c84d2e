//! # Productivity bot application
//!
//! Wires bot-core, handler-chain, productivity, bot-telegram and webhook. Loads config from env,
//! runs the Telegram REPL and the webhook listener side by side.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig, ProductivityConfig};
pub use handlers::LoggingHandler;
pub use runner::{build_only, run_bot};
