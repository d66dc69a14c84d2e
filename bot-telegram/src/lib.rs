//! # bot-telegram
//!
//! Telegram transport for the bot: converts teloxide messages into [`bot_core::Message`], delivers
//! [`bot_core::Reply`] values through teloxide (display blocks as HTML), and runs the update loop
//! that feeds a [`handler_chain::HandlerChain`]. No task, timer or command logic lives here.

mod adapters;
mod bot_adapter;
mod render;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use render::{escape_html, render_embed_html};
pub use runner::run_repl;
