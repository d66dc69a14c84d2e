//! Reply formatting and delivery.
//!
//! The functions here build every reply the bot sends. [`Notifier`] delivers them through a
//! [`Bot`] without waiting on or retrying failures: a failed send is logged and dropped.

use std::sync::Arc;

use bot_core::{Bot, Embed, Message, Reply};
use tracing::{debug, error};

use crate::commands::HelpEntry;
use crate::task_store::Task;

pub const TASK_ADDED_COLOR: u32 = 0x00ff00;
pub const TASK_LIST_COLOR: u32 = 0x0099ff;
pub const HELP_COLOR: u32 = 0xff9900;

const DONE_GLYPH: &str = "✅";
const OPEN_GLYPH: &str = "⬜";

pub fn task_added(task: &Task) -> Reply {
    Embed::new("Task Added")
        .color(TASK_ADDED_COLOR)
        .description(format!("Task: {}", task.description))
        .footer(format!("Task #{}", task.id))
        .into()
}

/// `You have no tasks.` when empty, otherwise one `<glyph> <id>. <description>` line per task.
pub fn task_list(tasks: &[Task]) -> Reply {
    if tasks.is_empty() {
        return Reply::text("You have no tasks.");
    }

    let lines: Vec<String> = tasks
        .iter()
        .map(|task| {
            let glyph = if task.completed { DONE_GLYPH } else { OPEN_GLYPH };
            format!("{} {}. {}", glyph, task.id, task.description)
        })
        .collect();

    Embed::new("Your Tasks")
        .color(TASK_LIST_COLOR)
        .description(lines.join("\n"))
        .into()
}

pub fn task_completed(task: &Task) -> Reply {
    Reply::text(format!("Task #{} marked as complete! 🎉", task.id))
}

pub fn reminder_set(minutes: u64) -> Reply {
    Reply::text(format!("Reminder set for {} minutes from now!", minutes))
}

pub fn reminder_due(text: &str) -> Reply {
    Reply::text(format!("⏰ Reminder: {}", text))
}

pub fn pomodoro_started(minutes: u64) -> Reply {
    Reply::text(format!("Starting a {}-minute Pomodoro timer! 🍅", minutes))
}

pub fn pomodoro_finished(minutes: u64) -> Reply {
    Reply::text(format!(
        "⏰ Time's up! Your {}-minute Pomodoro is complete! Take a break! 🎉",
        minutes
    ))
}

pub fn help(entries: &[HelpEntry]) -> Reply {
    entries
        .iter()
        .fold(
            Embed::new("Productivity Bot Commands")
                .color(HELP_COLOR)
                .description("Here are all available commands:"),
            |embed, entry| embed.field(entry.usage.clone(), entry.summary.clone()),
        )
        .into()
}

/// Sends replies back to the message that asked for them, through the configured transport.
#[derive(Clone)]
pub struct Notifier {
    bot: Arc<dyn Bot>,
}

impl Notifier {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// Answers `origin` in its chat. Returns whether delivery succeeded; failures are only logged.
    pub async fn reply(&self, origin: &Message, reply: &Reply) -> bool {
        match self.bot.reply_to(origin, reply).await {
            Ok(()) => {
                debug!(chat_id = origin.chat.id, message_id = %origin.id, "Reply delivered");
                true
            }
            Err(e) => {
                error!(
                    error = %e,
                    chat_id = origin.chat.id,
                    message_id = %origin.id,
                    "Failed to deliver reply"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bot_core::{Chat, User};
    use chrono::Utc;

    fn task(id: u64, description: &str, completed: bool) -> Task {
        Task {
            id,
            description: description.to_string(),
            created_at: Utc::now(),
            completed,
        }
    }

    #[test]
    fn test_task_added_embed() {
        let Reply::Embed(embed) = task_added(&task(2, "walk dog", false)) else {
            panic!("expected embed");
        };
        assert_eq!(embed.title, "Task Added");
        assert_eq!(embed.description.as_deref(), Some("Task: walk dog"));
        assert_eq!(embed.footer.as_deref(), Some("Task #2"));
        assert_eq!(embed.color, TASK_ADDED_COLOR);
    }

    #[test]
    fn test_task_list_lines_carry_glyph_and_id() {
        let reply = task_list(&[task(1, "buy milk", true), task(2, "walk dog", false)]);
        let Reply::Embed(embed) = reply else {
            panic!("expected embed");
        };
        assert_eq!(
            embed.description.as_deref(),
            Some("✅ 1. buy milk\n⬜ 2. walk dog")
        );
    }

    #[test]
    fn test_empty_task_list_is_plain_text() {
        assert_eq!(task_list(&[]), Reply::text("You have no tasks."));
    }

    #[test]
    fn test_help_lists_entries_as_fields() {
        let entries = vec![
            HelpEntry {
                usage: "!list".to_string(),
                summary: "List all your tasks".to_string(),
            },
            HelpEntry {
                usage: "!help".to_string(),
                summary: "Show this help message".to_string(),
            },
        ];
        let Reply::Embed(embed) = help(&entries) else {
            panic!("expected embed");
        };
        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.fields[0].name, "!list");
        assert_eq!(embed.color, HELP_COLOR);
    }

    #[test]
    fn test_timer_texts_include_duration() {
        assert!(pomodoro_started(25).to_plain_text().contains("25-minute"));
        assert!(pomodoro_finished(5).to_plain_text().contains("5-minute Pomodoro is complete"));
        assert_eq!(reminder_due("stretch").to_plain_text(), "⏰ Reminder: stretch");
    }

    struct FailingBot;

    #[async_trait]
    impl Bot for FailingBot {
        async fn send_message(&self, _chat: &Chat, _text: &str) -> bot_core::Result<()> {
            Err(bot_core::DbotError::Bot("unreachable".to_string()))
        }

        async fn send_embed(&self, _chat: &Chat, _embed: &Embed) -> bot_core::Result<()> {
            Err(bot_core::DbotError::Bot("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_reply_swallows_delivery_failure() {
        let notifier = Notifier::new(Arc::new(FailingBot));
        let origin = Message {
            id: "5".to_string(),
            user: User {
                id: 1,
                is_bot: false,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 1,
                chat_type: "private".to_string(),
            },
            content: "!list".to_string(),
            created_at: Utc::now(),
        };
        assert!(!notifier.reply(&origin, &Reply::text("hi")).await);
    }
}
