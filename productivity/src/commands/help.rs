//! `!help`.

use async_trait::async_trait;

use super::{Command, CommandContext, CommandOutput, HelpEntry};
use crate::error::CommandError;
use crate::notifier;

/// Lists the entries it was built with, followed by its own.
pub struct HelpCommand {
    entries: Vec<HelpEntry>,
}

impl HelpCommand {
    pub fn new(mut entries: Vec<HelpEntry>) -> Self {
        entries.push(HelpEntry {
            usage: "!help".to_string(),
            summary: "Show this help message".to_string(),
        });
        Self { entries }
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "!help"
    }

    fn usage(&self) -> &'static str {
        "!help"
    }

    fn summary(&self) -> String {
        "Show this help message".to_string()
    }

    async fn execute(
        &self,
        _ctx: &CommandContext<'_>,
        _args: &[String],
    ) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::reply(notifier::help(&self.entries)))
    }
}
