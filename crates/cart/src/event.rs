//! Cart change notifications.

use serde::{Deserialize, Serialize};

use storefront_catalog::Product;

/// A mutation that has been applied to the cart.
///
/// `position` is the entry index the mutation affected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    ItemAdded { product: Product, position: usize },
    ItemRemoved { product: Product, position: usize },
    Cleared { removed: usize },
}

impl CartEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "cart.item.added",
            CartEvent::ItemRemoved { .. } => "cart.item.removed",
            CartEvent::Cleared { .. } => "cart.cleared",
        }
    }
}
