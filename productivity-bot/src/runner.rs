//! Startup: logging, components, webhook listener and Telegram REPL.

use anyhow::{Context, Result};
use bot_core::{init_tracing, Bot};
use bot_telegram::run_repl;
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::components::{build_bot_components, build_handler_chain, BotComponents};
use super::config::BotConfig;

/// Main entry: validate config, init logging, build components, then run the webhook listener and
/// the REPL together. Returns when either stops.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        port = config.port(),
        log_file = %config.log_file(),
        custom_api_url = config.telegram_api_url().is_some(),
        "Initializing bot"
    );

    let components = build_bot_components(&config, None);
    let handler_chain = build_handler_chain(&components);
    let listener = webhook::bind(config.port())
        .await
        .context("failed to start webhook listener")?;
    let teloxide_bot = components.teloxide_bot.clone();
    let state = components.state.clone();

    info!("Bot started successfully");

    tokio::select! {
        res = webhook::serve(listener) => {
            res.context("webhook server failed")?;
            warn!("Webhook server stopped");
        }
        res = run_repl(teloxide_bot, handler_chain) => {
            res?;
            info!("REPL stopped");
        }
    }

    let pending = state.timers.pending_count().await;
    if pending > 0 {
        warn!(pending, "Shutting down with timers still pending; they will not fire");
    }
    Ok(())
}

/// Builds components and handler chain without starting the REPL or the listener. Used by
/// integration tests that inject a mock bot and drive the chain with fake messages.
#[instrument(skip(config, bot_override))]
pub fn build_only(
    config: &BotConfig,
    bot_override: Option<Arc<dyn Bot>>,
) -> Result<(HandlerChain, BotComponents)> {
    config.validate()?;
    let components = build_bot_components(config, bot_override);
    let handler_chain = build_handler_chain(&components);
    Ok((handler_chain, components))
}
