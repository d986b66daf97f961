//! Headless storefront: fetch the catalog and print the product grid.

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use storefront_cart::InMemoryCart;
    use storefront_catalog::HttpCatalogFetcher;
    use storefront_web::{BANNER, CategoryBar, ProductListView, StorefrontConfig, TimedNotifier};

    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    storefront_observability::init(config.log_format);

    tracing::info!(api_url = %config.api_url, "starting storefront");

    let cart = InMemoryCart::shared();
    let notifier = TimedNotifier::new(config.notification_duration);
    let fetcher = HttpCatalogFetcher::new(config.api_url.clone());

    let mut view = ProductListView::new(cart, notifier);
    view.mount(&fetcher).await;

    print!(
        "{}",
        storefront_web::text::render_page(&BANNER, &CategoryBar::default(), &view)
    );
    Ok(())
}

// The wasm32 build starts from `frontend::main` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
