//! Application-owned state shared by the command handlers.

use crate::notifier::Notifier;
use crate::task_store::TaskStore;
use crate::timer::TimerService;

pub const DEFAULT_POMODORO_MINUTES: u64 = 25;

/// Built once at startup and handed to [`crate::ProductivityHandler`].
#[derive(Clone)]
pub struct AppState {
    pub tasks: TaskStore,
    pub timers: TimerService,
    pub notifier: Notifier,
}

impl AppState {
    /// Fresh empty task store and timer registry delivering through `notifier`.
    pub fn new(notifier: Notifier) -> Self {
        Self {
            tasks: TaskStore::new(),
            timers: TimerService::new(notifier.clone()),
            notifier,
        }
    }
}
