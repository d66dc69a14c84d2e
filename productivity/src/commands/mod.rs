//! Text commands: parsing, the [`Command`] trait, and the command implementations.
//!
//! A message like `!remind 10 stretch` splits on whitespace; the first token, lowercased, names
//! the command and the rest are its arguments. Commands never send anything themselves: they
//! return a [`CommandOutput`] with the immediate reply and, for timers, a [`FollowUp`] to
//! schedule once the reply is out.

mod help;
mod router;
mod tasks;
mod timers;

use std::time::Duration;

use async_trait::async_trait;
use bot_core::Reply;

use crate::error::CommandError;
use crate::task_store::TaskStore;
use crate::timer::TimerKind;

pub use help::HelpCommand;
pub use router::CommandRouter;
pub use tasks::{AddTaskCommand, CompleteTaskCommand, ListTasksCommand};
pub use timers::{PomodoroCommand, RemindCommand};

/// A command invocation split into name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token, lowercased (e.g. `!task`).
    pub name: String,
    pub args: Vec<String>,
}

/// Splits `content` on whitespace. `None` for blank content.
pub fn parse_command(content: &str) -> Option<ParsedCommand> {
    let mut tokens = content.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    Some(ParsedCommand {
        name,
        args: tokens.map(str::to_string).collect(),
    })
}

/// Non-negative whole minutes, or `None`.
pub(crate) fn parse_minutes(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

/// `None` if the minute count does not fit a [`Duration`] in seconds.
pub fn minutes_to_delay(minutes: u64) -> Option<Duration> {
    minutes.checked_mul(60).map(Duration::from_secs)
}

/// What a command has to work with: the store and who is asking.
pub struct CommandContext<'a> {
    pub tasks: &'a TaskStore,
    pub user_id: i64,
}

/// A reply to deliver later, once, through the timer service.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUp {
    pub kind: TimerKind,
    pub delay: Duration,
    pub reply: Reply,
}

/// Immediate reply plus an optional delayed one.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub reply: Reply,
    pub follow_up: Option<FollowUp>,
}

impl CommandOutput {
    pub fn reply(reply: Reply) -> Self {
        Self {
            reply,
            follow_up: None,
        }
    }

    pub fn with_follow_up(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }
}

/// One `!help` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub usage: String,
    pub summary: String,
}

#[async_trait]
pub trait Command: Send + Sync {
    /// Trigger token, lowercase, including the `!`.
    fn name(&self) -> &'static str;

    /// Usage line shown in help, e.g. `!complete <task_id>`.
    fn usage(&self) -> &'static str;

    fn summary(&self) -> String;

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        args: &[String],
    ) -> Result<CommandOutput, CommandError>;

    fn help_entry(&self) -> HelpEntry {
        HelpEntry {
            usage: self.usage().to_string(),
            summary: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_lowercases_name_and_splits_args() {
        let parsed = parse_command("  !REMIND   10  stretch   legs ").unwrap();
        assert_eq!(parsed.name, "!remind");
        assert_eq!(parsed.args, vec!["10", "stretch", "legs"]);
    }

    #[test]
    fn test_parse_command_blank_is_none() {
        assert!(parse_command("").is_none());
        assert!(parse_command("   \n ").is_none());
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("0"), Some(0));
        assert_eq!(parse_minutes("45"), Some(45));
        assert_eq!(parse_minutes("-5"), None);
        assert_eq!(parse_minutes("1.5"), None);
        assert_eq!(parse_minutes("abc"), None);
    }

    #[test]
    fn test_minutes_to_delay_overflow() {
        assert_eq!(minutes_to_delay(2), Some(Duration::from_secs(120)));
        assert_eq!(minutes_to_delay(u64::MAX), None);
    }
}
