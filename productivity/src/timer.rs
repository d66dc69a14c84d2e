//! One-shot delayed notifications (reminders and Pomodoro sessions).
//!
//! Each scheduled timer is a tokio task that sleeps for its delay, answers the message that
//! created it once, and leaves the registry. The registry maps the [`TimerId`] returned at creation to the pending task so callers
//! can list or cancel timers. Nothing survives a restart and pending timers are abandoned on shutdown.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bot_core::{Message, Reply};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::info;

use crate::notifier::Notifier;

/// Identifier handed out at scheduling time. Monotonic, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    Reminder,
    Pomodoro,
}

/// Snapshot of a timer that has not fired yet.
#[derive(Debug, Clone)]
pub struct PendingTimer {
    pub id: TimerId,
    pub kind: TimerKind,
    pub chat_id: i64,
    pub delay: Duration,
    /// `None` when the delay is too large to express as a wall-clock time.
    pub fires_at: Option<DateTime<Utc>>,
}

struct Entry {
    timer: PendingTimer,
    handle: AbortHandle,
}

type Registry = HashMap<TimerId, Entry>;

/// Schedules fire-once replies and tracks the ones still pending. Clones share the registry.
#[derive(Clone)]
pub struct TimerService {
    notifier: Notifier,
    next_id: Arc<AtomicU64>,
    pending: Arc<Mutex<Registry>>,
}

impl TimerService {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            notifier,
            next_id: Arc::new(AtomicU64::new(1)),
            pending: Arc::new(Mutex::new(Registry::new())),
        }
    }

    /// Answers `origin` with `reply` once, `delay` from now. Must be called inside a tokio runtime.
    pub async fn schedule(
        &self,
        origin: Message,
        kind: TimerKind,
        delay: Duration,
        reply: Reply,
    ) -> TimerId {
        let id = TimerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let fires_at = chrono::Duration::from_std(delay)
            .ok()
            .and_then(|d| Utc::now().checked_add_signed(d));
        let timer = PendingTimer {
            id,
            kind,
            chat_id: origin.chat.id,
            delay,
            fires_at,
        };

        // Held across spawn so a zero-delay timer cannot deregister before it is registered.
        let mut pending = self.pending.lock().await;

        let notifier = self.notifier.clone();
        let registry = self.pending.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            registry.lock().await.remove(&id);
            info!(timer_id = %id, kind = ?kind, chat_id = origin.chat.id, "Timer fired");
            notifier.reply(&origin, &reply).await;
        });

        info!(
            timer_id = %id,
            kind = ?kind,
            chat_id = timer.chat_id,
            delay_secs = delay.as_secs(),
            "Timer scheduled"
        );
        pending.insert(
            id,
            Entry {
                timer,
                handle: handle.abort_handle(),
            },
        );
        id
    }

    /// Cancels a pending timer. Returns false if it already fired, was cancelled, or never existed.
    pub async fn cancel(&self, id: TimerId) -> bool {
        match self.pending.lock().await.remove(&id) {
            Some(entry) => {
                entry.handle.abort();
                info!(timer_id = %id, "Timer cancelled");
                true
            }
            None => false,
        }
    }

    /// Timers that have not fired yet, ordered by id.
    pub async fn pending(&self) -> Vec<PendingTimer> {
        let pending = self.pending.lock().await;
        let mut timers: Vec<PendingTimer> = pending.values().map(|e| e.timer.clone()).collect();
        timers.sort_by_key(|t| t.id);
        timers
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.lock().await.len()
    }
}
