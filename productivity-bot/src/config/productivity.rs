//! Command defaults for the productivity features.

use anyhow::{bail, Context, Result};
use productivity::{minutes_to_delay, DEFAULT_POMODORO_MINUTES};
use std::env;

#[derive(Debug, Clone)]
pub struct ProductivityConfig {
    /// POMODORO_DEFAULT_MINUTES; used by `!timer` without an argument.
    pub pomodoro_default_minutes: u64,
}

impl Default for ProductivityConfig {
    fn default() -> Self {
        Self {
            pomodoro_default_minutes: DEFAULT_POMODORO_MINUTES,
        }
    }
}

impl ProductivityConfig {
    pub fn from_env() -> Result<Self> {
        let pomodoro_default_minutes = match env::var("POMODORO_DEFAULT_MINUTES") {
            Ok(raw) => raw.trim().parse().with_context(|| {
                format!("POMODORO_DEFAULT_MINUTES is not a whole number: {}", raw)
            })?,
            Err(_) => DEFAULT_POMODORO_MINUTES,
        };
        Ok(Self {
            pomodoro_default_minutes,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.pomodoro_default_minutes == 0 {
            bail!("POMODORO_DEFAULT_MINUTES must be at least 1");
        }
        if minutes_to_delay(self.pomodoro_default_minutes).is_none() {
            bail!(
                "POMODORO_DEFAULT_MINUTES is too large to schedule: {}",
                self.pomodoro_default_minutes
            );
        }
        Ok(())
    }
}
