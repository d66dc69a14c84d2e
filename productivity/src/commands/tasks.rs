//! `!task`, `!list`, `!complete`.

use async_trait::async_trait;

use super::{Command, CommandContext, CommandOutput};
use crate::error::CommandError;
use crate::notifier;

const COMPLETE_USAGE: &str = "Please specify a task ID: !complete <task_id>";

pub struct AddTaskCommand;

#[async_trait]
impl Command for AddTaskCommand {
    fn name(&self) -> &'static str {
        "!task"
    }

    fn usage(&self) -> &'static str {
        "!task <description>"
    }

    fn summary(&self) -> String {
        "Add a new task".to_string()
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        args: &[String],
    ) -> Result<CommandOutput, CommandError> {
        let task = ctx.tasks.add_task(ctx.user_id, &args.join(" ")).await?;
        Ok(CommandOutput::reply(notifier::task_added(&task)))
    }
}

pub struct ListTasksCommand;

#[async_trait]
impl Command for ListTasksCommand {
    fn name(&self) -> &'static str {
        "!list"
    }

    fn usage(&self) -> &'static str {
        "!list"
    }

    fn summary(&self) -> String {
        "List all your tasks".to_string()
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _args: &[String],
    ) -> Result<CommandOutput, CommandError> {
        let tasks = ctx.tasks.list_tasks(ctx.user_id).await;
        Ok(CommandOutput::reply(notifier::task_list(&tasks)))
    }
}

pub struct CompleteTaskCommand;

#[async_trait]
impl Command for CompleteTaskCommand {
    fn name(&self) -> &'static str {
        "!complete"
    }

    fn usage(&self) -> &'static str {
        "!complete <task_id>"
    }

    fn summary(&self) -> String {
        "Mark a task as complete".to_string()
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        args: &[String],
    ) -> Result<CommandOutput, CommandError> {
        let raw_id = args.first().ok_or(CommandError::Usage(COMPLETE_USAGE))?;
        let task = ctx
            .tasks
            .complete_task(ctx.user_id, raw_id.parse().ok())
            .await?;
        Ok(CommandOutput::reply(notifier::task_completed(&task)))
    }
}
