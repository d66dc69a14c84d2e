//! Command name → [`Command`] lookup.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{
    AddTaskCommand, Command, CommandContext, CommandOutput, CompleteTaskCommand, HelpCommand,
    HelpEntry, ListTasksCommand, ParsedCommand, PomodoroCommand, RemindCommand,
};
use crate::error::CommandError;

/// Registered commands keyed by lowercase name. Registration order is kept for help listings.
#[derive(Clone, Default)]
pub struct CommandRouter {
    commands: HashMap<String, Arc<dyn Command>>,
    order: Vec<String>,
}

impl CommandRouter {
    /// Creates a router with no commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// The six built-in commands; `!help` lists the others in registration order.
    pub fn standard(pomodoro_default_minutes: u64) -> Self {
        let router = Self::new()
            .register(Arc::new(AddTaskCommand))
            .register(Arc::new(ListTasksCommand))
            .register(Arc::new(CompleteTaskCommand))
            .register(Arc::new(RemindCommand))
            .register(Arc::new(PomodoroCommand::new(pomodoro_default_minutes)));
        let help = HelpCommand::new(router.help_entries());
        router.register(Arc::new(help))
    }

    /// Adds a command. A later registration under the same name replaces the earlier one.
    pub fn register(mut self, command: Arc<dyn Command>) -> Self {
        let name = command.name().to_lowercase();
        if self.commands.insert(name.clone(), command).is_none() {
            self.order.push(name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(&name.to_lowercase())
    }

    /// Command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn help_entries(&self) -> Vec<HelpEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .map(|command| command.help_entry())
            .collect()
    }

    /// Runs the matching command. `None` when no command has that name.
    pub async fn dispatch(
        &self,
        ctx: &CommandContext<'_>,
        parsed: &ParsedCommand,
    ) -> Option<Result<CommandOutput, CommandError>> {
        let Some(command) = self.get(&parsed.name) else {
            debug!(command = %parsed.name, "Unrecognized command ignored");
            return None;
        };
        Some(command.execute(ctx, &parsed.args).await)
    }
}
