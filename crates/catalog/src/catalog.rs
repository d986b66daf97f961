//! Immutable catalog snapshot.

use std::collections::HashSet;
use std::sync::Arc;

use storefront_core::ProductId;

use crate::product::Product;
use crate::sort::{self, SortSpec};

/// The products of one fetch, in the order the endpoint returned them.
///
/// Cloning shares the same backing slice. Nothing reorders it: sorted views
/// are derived with [`Catalog::sorted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a snapshot. Ids are unique within it: a record repeating an
    /// earlier id is dropped and logged, the first one wins.
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
        let mut unique = Vec::with_capacity(products.len());
        for product in products {
            if seen.insert(product.id_typed().clone()) {
                unique.push(product);
            } else {
                tracing::warn!(product_id = %product.id_typed(), "dropping product with duplicate id");
            }
        }

        Self {
            products: unique.into(),
        }
    }

    pub fn empty() -> Self {
        Self {
            products: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// A freshly ordered view of the snapshot.
    pub fn sorted(&self, spec: &SortSpec) -> Vec<&Product> {
        sort::sorted(&self.products, spec)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}
