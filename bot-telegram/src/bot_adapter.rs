//! Wraps teloxide::Bot and implements [`bot_core::Bot`]. Production code sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use bot_core::{Bot as CoreBot, Chat, DbotError, Embed, Message, Reply, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ParseMode, ReplyParameters},
};
use tracing::{error, warn};

use crate::render::render_embed_html;

/// Builds a teloxide Bot for `token`, pointed at `api_url` when given.
/// An unparsable URL is logged and the default API is used.
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Thin wrapper around teloxide::Bot that implements bot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

}

/// Parses a core message id (Telegram numeric string) into an i32.
fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for reply: {}", s)))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_embed(&self, chat: &Chat, embed: &Embed) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), render_embed_html(embed))
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    /// Sends as a Telegram reply quoting `message`; still delivered if that message is gone.
    async fn reply_to(&self, message: &Message, reply: &Reply) -> Result<()> {
        let id = match parse_message_id(&message.id) {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, chat_id = message.chat.id, "Replying without quote");
                return self.send_reply(&message.chat, reply).await;
            }
        };

        let chat_id = ChatId(message.chat.id);
        let request = match reply {
            Reply::Text(text) => self.bot.send_message(chat_id, text.clone()),
            Reply::Embed(embed) => self
                .bot
                .send_message(chat_id, render_embed_html(embed))
                .parse_mode(ParseMode::Html),
        };
        request
            .reply_parameters(ReplyParameters::new(MessageId(id)).allow_sending_without_reply())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
