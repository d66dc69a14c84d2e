//! # productivity
//!
//! The bot's domain: a per-user [`TaskStore`], a [`TimerService`] for one-shot reminders and
//! Pomodoro sessions, a [`CommandRouter`] that maps `!command` tokens to [`Command`]s, a
//! [`Notifier`] that formats and delivers replies, and [`ProductivityHandler`], which plugs all of
//! it into a handler chain.

pub mod commands;
pub mod error;
pub mod handler;
pub mod notifier;
pub mod state;
pub mod task_store;
pub mod timer;

pub use commands::{
    minutes_to_delay, parse_command, Command, CommandContext, CommandOutput, CommandRouter,
    FollowUp, HelpEntry, ParsedCommand,
};
pub use error::{CommandError, TaskError};
pub use handler::ProductivityHandler;
pub use notifier::Notifier;
pub use state::{AppState, DEFAULT_POMODORO_MINUTES};
pub use task_store::{Task, TaskStore};
pub use timer::{PendingTimer, TimerId, TimerKind, TimerService};
