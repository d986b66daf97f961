//! Browser-timer notifier backing the toast.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::*;

use crate::notification::{ManualNotifier, Notifier, Ticket};

/// Notifier whose message is a signal and whose clear is a browser timeout.
///
/// Showing a new message clears the pending timeout before scheduling its own.
#[derive(Clone)]
pub struct LeptosNotifier {
    slot: ManualNotifier,
    message: RwSignal<Option<String>>,
    pending: Rc<Cell<Option<TimeoutHandle>>>,
    duration: Duration,
}

impl LeptosNotifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: ManualNotifier::new(),
            message: create_rw_signal(None),
            pending: Rc::new(Cell::new(None)),
            duration,
        }
    }

    pub fn message(&self) -> ReadSignal<Option<String>> {
        self.message.read_only()
    }
}

impl Notifier for LeptosNotifier {
    fn notify(&self, message: String) -> Ticket {
        if let Some(previous) = self.pending.take() {
            previous.clear();
        }

        let ticket = self.slot.notify(message.clone());
        self.message.set(Some(message));

        let slot = self.slot.clone();
        let signal = self.message;
        let scheduled = set_timeout_with_handle(
            move || {
                if slot.expire(ticket) {
                    signal.set(None);
                }
            },
            self.duration,
        );

        match scheduled {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => tracing::warn!(?err, "failed to schedule notification clear"),
        }

        ticket
    }

    fn current(&self) -> Option<String> {
        self.message.get_untracked()
    }
}
