//! REPL runner: converts teloxide messages to core messages and runs the handler chain on each.

use anyhow::Result;
use bot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Logs the bot identity, then processes updates until shutdown.
///
/// The chain is awaited inside the update callback rather than spawned: teloxide hands one chat's
/// updates over in order, so a user's commands are applied in the order they arrived.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            let name = me
                .user
                .username
                .clone()
                .unwrap_or_else(|| me.user.first_name.clone());
            info!(username = %name, bot_id = me.user.id.0, "Logged in as {}", name);
        }
        Err(e) => warn!(error = %e, "get_me failed; continuing without bot identity"),
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Skipping non-text message");
                return Ok(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            debug!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            }
            Ok(())
        }
    })
    .await;

    Ok(())
}
