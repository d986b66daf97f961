//! Cart store: capability trait plus the in-memory session cart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, mpsc};

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_catalog::Product;
use storefront_core::{Price, ProductId};

use crate::event::CartEvent;
use crate::subscription::{ListenerId, Subscription};

/// What a view needs from the cart.
///
/// `add_item` never fails: there is no capacity limit and no validation, and
/// adding the same product twice yields two entries.
pub trait CartStore {
    fn add_item(&self, product: Product);

    /// Current entries in insertion order.
    fn read_items(&self) -> Vec<Product>;
}

impl<C> CartStore for Arc<C>
where
    C: CartStore + ?Sized,
{
    fn add_item(&self, product: Product) {
        (**self).add_item(product)
    }

    fn read_items(&self) -> Vec<Product> {
        (**self).read_items()
    }
}

/// The handle every consumer of the session cart holds.
pub type CartHandle = Arc<InMemoryCart>;

/// One add event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

type Listener = Arc<dyn Fn(&CartEvent) + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    channels: Vec<mpsc::Sender<CartEvent>>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

/// In-memory cart for one browsing session.
///
/// - Entries live until the cart is dropped (no persistence)
/// - Listeners run after the entry lock is released, so they may read the cart
#[derive(Default)]
pub struct InMemoryCart {
    entries: Mutex<Vec<CartEntry>>,
    subscribers: Mutex<Subscribers>,
}

// Cart state is plain data; a panic mid-update cannot leave it half-written.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh, empty cart behind a shareable handle.
    pub fn shared() -> CartHandle {
        Arc::new(Self::new())
    }

    pub fn entries(&self) -> Vec<CartEntry> {
        lock(&self.entries).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }

    /// How many entries reference `id`.
    pub fn count_of(&self, id: &ProductId) -> usize {
        lock(&self.entries)
            .iter()
            .filter(|e| e.product.id_typed() == id)
            .count()
    }

    pub fn total(&self) -> Price {
        lock(&self.entries).iter().map(|e| e.product.price()).sum()
    }

    /// Remove the earliest entry for `id`.
    pub fn remove_item(&self, id: &ProductId) -> Option<Product> {
        let removed = {
            let mut entries = lock(&self.entries);
            let position = entries.iter().position(|e| e.product.id_typed() == id)?;
            let entry = entries.remove(position);
            (entry.product, position)
        };

        let (product, position) = removed;
        tracing::debug!(product_id = %id, position, "cart item removed");
        self.publish(CartEvent::ItemRemoved {
            product: product.clone(),
            position,
        });
        Some(product)
    }

    /// Empty the cart, returning how many entries were dropped.
    pub fn clear(&self) -> usize {
        let removed = {
            let mut entries = lock(&self.entries);
            let n = entries.len();
            entries.clear();
            n
        };

        tracing::debug!(removed, "cart cleared");
        self.publish(CartEvent::Cleared { removed });
        removed
    }

    pub fn subscribe(&self) -> Subscription<CartEvent> {
        let (tx, rx) = mpsc::channel();
        lock(&self.subscribers).channels.push(tx);
        Subscription::new(rx)
    }

    /// Register a callback run after every mutation.
    pub fn on_change<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        let mut subs = lock(&self.subscribers);
        let id = ListenerId(subs.next_listener);
        subs.next_listener += 1;
        subs.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut subs = lock(&self.subscribers);
        let before = subs.listeners.len();
        subs.listeners.retain(|(lid, _)| *lid != id);
        subs.listeners.len() != before
    }

    fn publish(&self, event: CartEvent) {
        let listeners: Vec<Listener> = {
            let mut subs = lock(&self.subscribers);

            // Drop any dead subscribers while publishing.
            subs.channels.retain(|tx| tx.send(event.clone()).is_ok());

            subs.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };

        for listener in listeners {
            listener(&event);
        }
    }
}

impl CartStore for InMemoryCart {
    fn add_item(&self, product: Product) {
        let position = {
            let mut entries = lock(&self.entries);
            entries.push(CartEntry {
                product: product.clone(),
                added_at: Utc::now(),
            });
            entries.len() - 1
        };

        tracing::debug!(product_id = %product.id_typed(), position, "cart item added");
        self.publish(CartEvent::ItemAdded { product, position });
    }

    fn read_items(&self) -> Vec<Product> {
        lock(&self.entries)
            .iter()
            .map(|e| e.product.clone())
            .collect()
    }
}

impl core::fmt::Debug for InMemoryCart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let subs = lock(&self.subscribers);
        f.debug_struct("InMemoryCart")
            .field("entries", &lock(&self.entries).len())
            .field("channels", &subs.channels.len())
            .field("listeners", &subs.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn product(id: u64, title: &str, cents: u64) -> Product {
        Product::new(id, title, Price::from_cents(cents))
    }

    fn ids(products: &[Product]) -> Vec<String> {
        products.iter().map(|p| p.id_typed().to_string()).collect()
    }

    #[test]
    fn add_is_additive_and_order_preserving() {
        let cart = InMemoryCart::new();
        let p1 = product(1, "one", 100);
        let p2 = product(2, "two", 200);

        cart.add_item(p1.clone());
        cart.add_item(p2.clone());

        assert_eq!(cart.read_items(), vec![p1, p2]);
    }

    #[test]
    fn same_product_twice_yields_two_entries() {
        let cart = InMemoryCart::new();
        let p1 = product(1, "one", 100);

        cart.add_item(p1.clone());
        cart.add_item(p1.clone());

        assert_eq!(cart.read_items(), vec![p1.clone(), p1.clone()]);
        assert_eq!(cart.count_of(p1.id_typed()), 2);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn read_items_does_not_mutate() {
        let cart = InMemoryCart::new();
        cart.add_item(product(1, "one", 100));
        let first = cart.read_items();
        let second = cart.read_items();
        assert_eq!(first, second);
    }

    #[test]
    fn remove_takes_the_earliest_entry() {
        let cart = InMemoryCart::new();
        cart.add_item(product(1, "one", 100));
        cart.add_item(product(2, "two", 200));
        cart.add_item(product(1, "one", 100));

        let removed = cart.remove_item(&ProductId::from(1)).unwrap();

        assert_eq!(removed.title(), "one");
        assert_eq!(ids(&cart.read_items()), vec!["2", "1"]);
        assert!(cart.remove_item(&ProductId::from(9)).is_none());
    }

    #[test]
    fn total_and_clear() {
        let cart = InMemoryCart::new();
        cart.add_item(product(1, "one", 150));
        cart.add_item(product(2, "two", 250));
        assert_eq!(cart.total(), Price::from_cents(400));

        assert_eq!(cart.clear(), 2);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn shared_handle_sees_the_same_cart() {
        let cart = InMemoryCart::shared();
        let grid_view: CartHandle = Arc::clone(&cart);
        let header_view: CartHandle = Arc::clone(&cart);

        grid_view.add_item(product(1, "one", 100));

        assert_eq!(header_view.read_items().len(), 1);
    }

    #[test]
    fn subscribers_receive_events_in_order() {
        let cart = InMemoryCart::new();
        let sub = cart.subscribe();

        cart.add_item(product(1, "one", 100));
        cart.remove_item(&ProductId::from(1));
        cart.clear();

        let kinds: Vec<_> = sub.drain().iter().map(|e| e.event_type()).collect();
        assert_eq!(kinds, vec!["cart.item.added", "cart.item.removed", "cart.cleared"]);
    }

    #[test]
    fn dropped_subscriptions_are_pruned() {
        let cart = InMemoryCart::new();
        let kept = cart.subscribe();
        drop(cart.subscribe());

        cart.add_item(product(1, "one", 100));

        assert_eq!(lock(&cart.subscribers).channels.len(), 1);
        assert!(matches!(kept.try_recv(), Ok(CartEvent::ItemAdded { position: 0, .. })));
    }

    #[test]
    fn listeners_can_read_the_cart() {
        let cart = InMemoryCart::shared();
        let seen = Arc::new(AtomicUsize::new(0));

        let reader = Arc::clone(&cart);
        let counter = Arc::clone(&seen);
        let id = cart.on_change(move |_| {
            counter.store(reader.len(), Ordering::SeqCst);
        });

        cart.add_item(product(1, "one", 100));
        cart.add_item(product(2, "two", 100));
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        assert!(cart.remove_listener(id));
        cart.add_item(product(3, "three", 100));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert!(!cart.remove_listener(id));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the cart reads back exactly the sequence of adds.
            #[test]
            fn read_items_mirrors_adds(adds in proptest::collection::vec(0u64..5, 0..40)) {
                let cart = InMemoryCart::new();
                let expected: Vec<Product> = adds.iter().map(|&id| product(id, "p", id * 100)).collect();

                for p in &expected {
                    cart.add_item(p.clone());
                }

                prop_assert_eq!(cart.read_items(), expected.clone());
                prop_assert_eq!(cart.total(), expected.iter().map(|p| p.price()).sum::<Price>());
            }
        }
    }
}
