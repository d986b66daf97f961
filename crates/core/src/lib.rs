//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, the
//! cart and the view layer (no IO, no rendering).

pub mod error;
pub mod id;
pub mod price;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use price::Price;
