//! Tokio-driven notifier for native builds.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::notification::{ManualNotifier, NotificationState, Notifier, Ticket};

/// Notifier that clears itself after `duration`.
///
/// At most one clear task is pending: showing a new message aborts the
/// previous task before scheduling its own.
#[derive(Debug, Clone)]
pub struct TimedNotifier {
    slot: ManualNotifier,
    duration: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl TimedNotifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: ManualNotifier::new(),
            duration,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn state(&self) -> NotificationState {
        self.slot.state()
    }

    /// Hide the message now and drop the pending clear.
    pub fn dismiss(&self) {
        self.cancel_pending();
        self.slot.dismiss();
    }

    fn cancel_pending(&self) {
        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(task) = previous {
            task.abort();
        }
    }
}

impl Notifier for TimedNotifier {
    fn notify(&self, message: String) -> Ticket {
        self.cancel_pending();
        let ticket = self.slot.notify(message);

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!(error = %err, "no tokio runtime; notification will not auto-clear");
                return ticket;
            }
        };

        let slot = self.slot.clone();
        let duration = self.duration;
        let task = handle.spawn(async move {
            tokio::time::sleep(duration).await;
            if slot.expire(ticket) {
                tracing::trace!(?ticket, "notification cleared");
            }
        });

        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(task);
        ticket
    }

    fn current(&self) -> Option<String> {
        self.slot.current()
    }
}
