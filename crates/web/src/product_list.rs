//! Product grid view model.
//!
//! Owns the load state of the catalog, the active sort and handles to the
//! session cart and the notifier. Rendering always derives a fresh, sorted
//! copy; the fetched catalog is never reordered.

use serde::Serialize;

use storefront_cart::CartStore;
use storefront_catalog::{
    Catalog, Product, ProductSource, SortDirection, SortField, SortSpec, truncate_description,
};
use storefront_core::ProductId;

use crate::notification::{Notifier, added_to_cart_message};
use crate::routes;

/// `Loading → Loaded | LoadFailed`; terminal until the next mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Catalog),
    LoadFailed,
}

impl LoadState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Loaded(catalog) => Some(catalog),
            LoadState::Loading | LoadState::LoadFailed => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Fetch the catalog for the grid. Never fails: a retrieval error is logged
/// and the grid stays empty.
pub async fn load_catalog<S>(source: &S) -> LoadState
where
    S: ProductSource,
{
    match source.fetch_products().await {
        Ok(catalog) => LoadState::Loaded(catalog),
        Err(err) => {
            tracing::error!(error = %err, "error fetching products");
            LoadState::LoadFailed
        }
    }
}

/// One tile of the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub image_alt: String,
    pub description: String,
    pub price_label: String,
    pub detail_path: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id_typed().clone(),
            name: product.display_name().to_string(),
            image_url: product.image_url().to_string(),
            image_alt: product.display_name().to_string(),
            description: truncate_description(product.description()).into_owned(),
            // Prices are held in whole cents, so `10.999` shows as `$ 11` and `9.9` as `$ 9.90`.
            price_label: format!("$ {}", product.price()),
            detail_path: routes::product_detail_path(product.id_typed()),
        }
    }
}

/// Cards for `catalog` in `spec` order.
pub fn render_cards(catalog: &Catalog, spec: &SortSpec) -> Vec<ProductCard> {
    catalog
        .sorted(spec)
        .into_iter()
        .map(ProductCard::from_product)
        .collect()
}

/// Label of the order toggle button.
pub fn order_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "Sort Ascending",
        SortDirection::Descending => "Sort Descending",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortControls {
    pub options: &'static [SortField],
    pub selected: SortField,
    pub order_label: &'static str,
}

impl SortControls {
    pub fn for_spec(spec: SortSpec) -> Self {
        Self {
            options: SortField::SELECTABLE,
            selected: spec.field,
            order_label: order_label(spec.direction),
        }
    }
}

/// Put `product` in the session cart and announce it.
pub fn add_product_to_cart<C, N>(cart: &C, notifier: &N, product: Product)
where
    C: CartStore,
    N: Notifier,
{
    let id = product.id_typed().clone();
    let message = added_to_cart_message(&product);

    cart.add_item(product);
    notifier.notify(message);

    tracing::info!(product_id = %id, "product added to cart");
}

pub struct ProductListView<C, N> {
    state: LoadState,
    sort: SortSpec,
    cart: C,
    notifier: N,
}

impl<C, N> ProductListView<C, N>
where
    C: CartStore,
    N: Notifier,
{
    pub fn new(cart: C, notifier: N) -> Self {
        Self {
            state: LoadState::Loading,
            sort: SortSpec::default(),
            cart,
            notifier,
        }
    }

    /// Reset the sort and load the catalog from `source`.
    pub async fn mount<S>(&mut self, source: &S)
    where
        S: ProductSource,
    {
        self.sort = SortSpec::default();
        self.state = LoadState::Loading;
        self.state = load_catalog(source).await;
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn cart(&self) -> &C {
        &self.cart
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort.field = field;
    }

    pub fn toggle_order(&mut self) {
        self.sort.direction = self.sort.direction.toggled();
    }

    pub fn sort_controls(&self) -> SortControls {
        SortControls::for_spec(self.sort)
    }

    /// Cards in display order; empty while loading or after a failed load.
    pub fn render(&self) -> Vec<ProductCard> {
        match self.state.catalog() {
            Some(catalog) => render_cards(catalog, &self.sort),
            None => Vec::new(),
        }
    }

    /// Add the catalog product `id` to the cart and announce it.
    pub fn add_to_cart(&self, id: &ProductId) -> Option<Product> {
        let product = self.state.catalog()?.get(id)?.clone();
        add_product_to_cart(&self.cart, &self.notifier, product.clone());
        Some(product)
    }

    pub fn notification(&self) -> Option<String> {
        self.notifier.current()
    }

    /// Detail route of a product in the loaded catalog.
    pub fn view_path(&self, id: &ProductId) -> Option<String> {
        self.state
            .catalog()?
            .get(id)
            .map(|p| routes::product_detail_path(p.id_typed()))
    }
}

impl<C, N> core::fmt::Debug for ProductListView<C, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductListView")
            .field("state", &self.state)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}
