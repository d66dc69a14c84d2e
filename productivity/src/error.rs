//! Command failures. The `Display` text of each variant is exactly what the user sees.

use bot_core::Reply;
use thiserror::Error;

/// Task store lookup and validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Please provide a task description: !task <description>")]
    EmptyDescription,

    #[error("You have no tasks.")]
    NoTasks,

    #[error("Task not found.")]
    NotFound,
}

/// Anything a command can reject with. No state is mutated when one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Missing or malformed arguments; carries the usage line.
    #[error("{0}")]
    Usage(&'static str),

    #[error(transparent)]
    Task(#[from] TaskError),
}

impl CommandError {
    pub fn to_reply(&self) -> Reply {
        Reply::text(self.to_string())
    }
}
