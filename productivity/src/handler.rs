//! [`ProductivityHandler`]: the handler-chain entry point for chat commands.

use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument, warn};

use crate::commands::{parse_command, CommandContext, CommandRouter};
use crate::state::AppState;

/// Routes each message to its command, answers the command message, and schedules any follow-up
/// timer (which answers the same message when it fires). Messages from bot accounts (this bot included) never reach a command.
pub struct ProductivityHandler {
    router: CommandRouter,
    state: AppState,
}

impl ProductivityHandler {
    pub fn new(router: CommandRouter, state: AppState) -> Self {
        Self { router, state }
    }
}

#[async_trait]
impl Handler for ProductivityHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        if message.user.is_bot {
            debug!(user_id = message.user.id, "Ignoring message from bot account");
            return Ok(false);
        }
        Ok(true)
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(parsed) = parse_command(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };

        let ctx = CommandContext {
            tasks: &self.state.tasks,
            user_id: message.user.id,
        };
        let Some(outcome) = self.router.dispatch(&ctx, &parsed).await else {
            return Ok(HandlerResponse::Continue);
        };

        let output = match outcome {
            Ok(output) => output,
            Err(e) => {
                warn!(command = %parsed.name, error = %e, "Command rejected");
                let reply = e.to_reply();
                self.state.notifier.reply(message, &reply).await;
                return Ok(HandlerResponse::Reply(reply.to_plain_text()));
            }
        };

        info!(command = %parsed.name, "Command handled");
        self.state.notifier.reply(message, &output.reply).await;

        if let Some(follow_up) = output.follow_up {
            self.state
                .timers
                .schedule(
                    message.clone(),
                    follow_up.kind,
                    follow_up.delay,
                    follow_up.reply,
                )
                .await;
        }

        Ok(HandlerResponse::Reply(output.reply.to_plain_text()))
    }
}
