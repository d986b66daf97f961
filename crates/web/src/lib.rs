//! `storefront-web`
//!
//! **Responsibility:** the storefront page: banner, category strip, sortable
//! product grid and the add-to-cart notification.
//!
//! This crate provides:
//! - Target-independent view models ([`ProductListView`], [`Banner`], [`CategoryBar`])
//! - Configuration from the environment ([`StorefrontConfig`])
//! - A Tokio-driven notifier and a headless text renderer for native builds
//! - The Leptos client (wasm32 only, under `frontend`)

pub mod banner;
pub mod categories;
pub mod config;
pub mod notification;
pub mod product_list;
pub mod routes;
pub mod text;

#[cfg(not(target_arch = "wasm32"))]
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use banner::{BANNER, Banner};
pub use categories::CategoryBar;
pub use config::{ConfigError, StorefrontConfig};
pub use notification::{ManualNotifier, NotificationSlot, NotificationState, Notifier, Ticket};
pub use product_list::{
    LoadState, ProductCard, ProductListView, SortControls, add_product_to_cart, load_catalog,
};

#[cfg(not(target_arch = "wasm32"))]
pub use timer::TimedNotifier;
