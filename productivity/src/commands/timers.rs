//! `!remind` and `!timer`.
//!
//! Both take whole, non-negative minutes. A minute argument that is present but not a number is a
//! usage error for both commands; only `!timer` may omit it, falling back to its default.

use async_trait::async_trait;

use super::{minutes_to_delay, parse_minutes, Command, CommandContext, CommandOutput, FollowUp};
use crate::error::CommandError;
use crate::notifier;
use crate::state::DEFAULT_POMODORO_MINUTES;
use crate::timer::TimerKind;

const REMIND_USAGE: &str = "Please use format: !remind <minutes> <reminder_text>";
const TIMER_USAGE: &str = "Please use format: !timer [minutes]";

pub struct RemindCommand;

#[async_trait]
impl Command for RemindCommand {
    fn name(&self) -> &'static str {
        "!remind"
    }

    fn usage(&self) -> &'static str {
        "!remind <minutes> <text>"
    }

    fn summary(&self) -> String {
        "Set a reminder".to_string()
    }

    async fn execute(
        &self,
        _ctx: &CommandContext<'_>,
        args: &[String],
    ) -> Result<CommandOutput, CommandError> {
        let [raw_minutes, text @ ..] = args else {
            return Err(CommandError::Usage(REMIND_USAGE));
        };
        if text.is_empty() {
            return Err(CommandError::Usage(REMIND_USAGE));
        }
        let minutes = parse_minutes(raw_minutes).ok_or(CommandError::Usage(REMIND_USAGE))?;
        let delay = minutes_to_delay(minutes).ok_or(CommandError::Usage(REMIND_USAGE))?;

        Ok(
            CommandOutput::reply(notifier::reminder_set(minutes)).with_follow_up(FollowUp {
                kind: TimerKind::Reminder,
                delay,
                reply: notifier::reminder_due(&text.join(" ")),
            }),
        )
    }
}

/// Pomodoro countdown; `default_minutes` applies when no argument is given.
pub struct PomodoroCommand {
    default_minutes: u64,
}

impl PomodoroCommand {
    pub fn new(default_minutes: u64) -> Self {
        Self { default_minutes }
    }
}

impl Default for PomodoroCommand {
    fn default() -> Self {
        Self::new(DEFAULT_POMODORO_MINUTES)
    }
}

#[async_trait]
impl Command for PomodoroCommand {
    fn name(&self) -> &'static str {
        "!timer"
    }

    fn usage(&self) -> &'static str {
        "!timer [minutes]"
    }

    fn summary(&self) -> String {
        format!("Start a Pomodoro timer (default {} mins)", self.default_minutes)
    }

    async fn execute(
        &self,
        _ctx: &CommandContext<'_>,
        args: &[String],
    ) -> Result<CommandOutput, CommandError> {
        let minutes = match args.first() {
            None => self.default_minutes,
            Some(raw) => parse_minutes(raw).ok_or(CommandError::Usage(TIMER_USAGE))?,
        };
        let delay = minutes_to_delay(minutes).ok_or(CommandError::Usage(TIMER_USAGE))?;

        Ok(
            CommandOutput::reply(notifier::pomodoro_started(minutes)).with_follow_up(FollowUp {
                kind: TimerKind::Pomodoro,
                delay,
                reply: notifier::pomodoro_finished(minutes),
            }),
        )
    }
}
