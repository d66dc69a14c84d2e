//! Recording [`Bot`] for integration tests: every delivered reply lands on a channel.

use std::sync::Arc;

use async_trait::async_trait;
use bot_core::{Bot, Chat, Embed, Message, Reply, Result, User};
use chrono::Utc;
use tokio::sync::mpsc;

/// One delivered reply.
#[derive(Debug, Clone)]
pub struct Sent {
    pub chat_id: i64,
    /// Id of the message this answers, when sent as a reply.
    pub in_reply_to: Option<String>,
    pub reply: Reply,
}

impl Sent {
    pub fn text(&self) -> String {
        self.reply.to_plain_text()
    }
}

pub struct RecordingBot {
    tx: mpsc::UnboundedSender<Sent>,
}

impl RecordingBot {
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<Sent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.tx.send(Sent {
            chat_id: chat.id,
            in_reply_to: None,
            reply: Reply::text(text),
        });
        Ok(())
    }

    async fn send_embed(&self, chat: &Chat, embed: &Embed) -> Result<()> {
        let _ = self.tx.send(Sent {
            chat_id: chat.id,
            in_reply_to: None,
            reply: Reply::Embed(embed.clone()),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, reply: &Reply) -> Result<()> {
        let _ = self.tx.send(Sent {
            chat_id: message.chat.id,
            in_reply_to: Some(message.id.clone()),
            reply: reply.clone(),
        });
        Ok(())
    }
}

pub fn message_from(user_id: i64, chat_id: i64, content: &str) -> Message {
    Message {
        id: format!("{}-{}", user_id, content.len()),
        user: User {
            id: user_id,
            is_bot: false,
            username: Some(format!("user{}", user_id)),
            first_name: None,
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "group".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}
