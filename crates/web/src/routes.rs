//! Route paths used by the storefront.

use storefront_core::ProductId;

pub const HOME: &str = "/";

/// Router pattern of the product detail page.
pub const PRODUCT_DETAIL_PATTERN: &str = "/products/:id";

/// Path the "view" action navigates to.
pub fn product_detail_path(id: &ProductId) -> String {
    format!("/products/{id}")
}
