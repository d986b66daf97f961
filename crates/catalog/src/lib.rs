//! Product catalog for the storefront.
//!
//! Holds the fetched product records, the client-side sort and the
//! description truncation used by the product grid. The only IO here is the
//! single listing request made by [`HttpCatalogFetcher`].

pub mod catalog;
pub mod fetcher;
pub mod product;
pub mod sort;
pub mod text;

pub use catalog::Catalog;
pub use fetcher::{HttpCatalogFetcher, ProductSource, RetrievalError, StaticCatalog};
pub use product::Product;
pub use sort::{SortDirection, SortField, SortSpec};
pub use text::{DESCRIPTION_LIMIT, truncate_description};
