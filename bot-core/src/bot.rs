//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; bot-telegram implements it over teloxide and tests substitute recorders.

use crate::error::Result;
use crate::reply::{Embed, Reply};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Sends text and display blocks to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a structured display block to the given chat.
    async fn send_embed(&self, chat: &Chat, embed: &Embed) -> Result<()>;

    /// Sends either kind of reply.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        match reply {
            Reply::Text(text) => self.send_message(chat, text).await,
            Reply::Embed(embed) => self.send_embed(chat, embed).await,
        }
    }

    /// Answers `message` in its chat. Transports that can quote the original override this;
    /// the default is a plain send to the same chat.
    async fn reply_to(&self, message: &Message, reply: &Reply) -> Result<()> {
        self.send_reply(&message.chat, reply).await
    }
}
