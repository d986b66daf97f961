//! Add-to-cart notification.
//!
//! The notification is a single slot: `Idle → Showing(message) → Idle`.
//! Showing a new message replaces the old one and issues a fresh [`Ticket`];
//! a clear only takes effect when it carries the current ticket, so the timer
//! of an earlier message can never hide a later one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_catalog::Product;

/// Identifies one `show`; required to expire it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationState {
    #[default]
    Idle,
    Showing { message: String, ticket: Ticket },
}

#[derive(Debug, Default)]
pub struct NotificationSlot {
    state: NotificationState,
    issued: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.state = NotificationState::Showing {
            message: message.into(),
            ticket,
        };
        ticket
    }

    /// Clear the slot if `ticket` is still the one showing.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        match &self.state {
            NotificationState::Showing { ticket: current, .. } if *current == ticket => {
                self.state = NotificationState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.state = NotificationState::Idle;
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    pub fn message(&self) -> Option<&str> {
        match &self.state {
            NotificationState::Showing { message, .. } => Some(message),
            NotificationState::Idle => None,
        }
    }
}

/// Text shown after `product` was added to the cart.
pub fn added_to_cart_message(product: &Product) -> String {
    format!("{} has been added to the cart!", product.display_name())
}

/// Where a view sends its transient messages.
pub trait Notifier {
    /// Show `message`, replacing whatever is showing.
    fn notify(&self, message: String) -> Ticket;

    fn current(&self) -> Option<String>;
}

/// Shared slot with no timer; whoever holds it expires tickets explicitly.
#[derive(Debug, Clone, Default)]
pub struct ManualNotifier {
    slot: Arc<Mutex<NotificationSlot>>,
}

impl ManualNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, NotificationSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn expire(&self, ticket: Ticket) -> bool {
        self.slot().expire(ticket)
    }

    pub fn dismiss(&self) {
        self.slot().dismiss();
    }

    pub fn state(&self) -> NotificationState {
        self.slot().state().clone()
    }
}

impl Notifier for ManualNotifier {
    fn notify(&self, message: String) -> Ticket {
        self.slot().show(message)
    }

    fn current(&self) -> Option<String> {
        self.slot().message().map(str::to_string)
    }
}
