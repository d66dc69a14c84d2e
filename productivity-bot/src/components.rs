//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use bot_core::Bot;
use bot_telegram::{build_teloxide_bot, TelegramBotAdapter};
use handler_chain::HandlerChain;
use productivity::{AppState, CommandRouter, Notifier, ProductivityHandler};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::BotConfig;
use super::handlers::LoggingHandler;

/// Everything run_bot needs after config is loaded.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Outbound side used by the notifier; the Telegram adapter unless overridden.
    pub bot: Arc<dyn Bot>,
    pub state: AppState,
    pub productivity_handler: Arc<ProductivityHandler>,
}

/// Builds components. When `bot_override` is `Some`, replies go there instead of Telegram (tests).
#[instrument(skip(config, bot_override))]
pub fn build_bot_components(config: &BotConfig, bot_override: Option<Arc<dyn Bot>>) -> BotComponents {
    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url());
    let bot: Arc<dyn Bot> = match bot_override {
        Some(bot) => bot,
        None => Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    };

    let state = AppState::new(Notifier::new(bot.clone()));
    let router = CommandRouter::standard(config.pomodoro_default_minutes());
    info!(
        commands = ?router.names().collect::<Vec<_>>(),
        pomodoro_default_minutes = config.pomodoro_default_minutes(),
        "Command router built"
    );
    let productivity_handler = Arc::new(ProductivityHandler::new(router, state.clone()));

    BotComponents {
        teloxide_bot,
        bot,
        state,
        productivity_handler,
    }
}

/// Logging first, then the command handler.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(components.productivity_handler.clone())
}
