//! Session-scoped shopping cart.
//!
//! One [`InMemoryCart`] is created per browsing session and shared by handle
//! (`Arc<InMemoryCart>`) with every view that reads or mutates it. Views
//! re-render through [`InMemoryCart::subscribe`] or [`InMemoryCart::on_change`]
//! instead of looking the cart up from ambient state.

pub mod event;
pub mod store;
pub mod subscription;

pub use event::CartEvent;
pub use store::{CartEntry, CartHandle, CartStore, InMemoryCart};
pub use subscription::{ListenerId, Subscription};
