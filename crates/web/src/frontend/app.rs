//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use storefront_cart::{CartEvent, CartHandle, InMemoryCart};
use storefront_catalog::{HttpCatalogFetcher, SortField, SortSpec};
use storefront_core::ProductId;

use crate::banner::BANNER;
use crate::categories::CategoryBar;
use crate::config::StorefrontConfig;
use crate::frontend::notifier::LeptosNotifier;
use crate::product_list::{ProductCard, SortControls, add_product_to_cart, load_catalog, render_cards};
use crate::routes;

/// Main application component.
///
/// The session cart is created here once and handed to every page as a prop.
#[component]
pub fn App() -> impl IntoView {
    let config = StorefrontConfig::compiled();
    let cart = InMemoryCart::shared();
    let notifier = LeptosNotifier::new(config.notification_duration);
    let fetcher = HttpCatalogFetcher::new(config.api_url.clone());

    view! {
        <Router>
            <Routes>
                <Route
                    path=routes::HOME
                    view=move || {
                        view! {
                            <ProductsPage
                                cart=cart.clone()
                                notifier=notifier.clone()
                                fetcher=fetcher.clone()
                            />
                        }
                    }
                />
                <Route path=routes::PRODUCT_DETAIL_PATTERN view=ProductDetailPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn Banner() -> impl IntoView {
    view! {
        <section class="banner">
            <div class="banner-content">
                <h1>
                    {BANNER.headline}
                    <br/>
                    <span class="highlight">{BANNER.highlight}</span>
                </h1>
                <p>{BANNER.tagline}</p>
            </div>
        </section>
    }
}

#[component]
fn Categories() -> impl IntoView {
    let bar = create_rw_signal(CategoryBar::default());
    let labels = bar.with_untracked(|b| b.categories().to_vec());

    view! {
        <nav class="categories">
            {labels
                .into_iter()
                .map(|label| {
                    let for_class = label.clone();
                    let for_click = label.clone();
                    view! {
                        <button
                            class="category"
                            class:selected=move || bar.with(|b| b.is_selected(&for_class))
                            on:click=move |_| bar.update(|b| {
                                b.select(&for_click);
                            })
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Storefront page: toast, banner, categories, sort controls and grid.
#[component]
fn ProductsPage(
    cart: CartHandle,
    notifier: LeptosNotifier,
    fetcher: HttpCatalogFetcher,
) -> impl IntoView {
    let catalog = create_local_resource(
        || (),
        move |_| {
            let fetcher = fetcher.clone();
            async move { load_catalog(&fetcher).await }
        },
    );

    let sort = create_rw_signal(SortSpec::default());

    let cart_count = create_rw_signal(cart.len());
    let listener = cart.on_change(move |event| {
        cart_count.update(|n| match event {
            CartEvent::ItemAdded { .. } => *n += 1,
            CartEvent::ItemRemoved { .. } => *n = n.saturating_sub(1),
            CartEvent::Cleared { .. } => *n = 0,
        })
    });
    {
        let cart = cart.clone();
        on_cleanup(move || {
            cart.remove_listener(listener);
        });
    }

    let add_to_cart = {
        let cart = cart.clone();
        let notifier = notifier.clone();
        Callback::new(move |id: ProductId| {
            let product = catalog.with_untracked(|state| {
                state
                    .as_ref()
                    .and_then(|s| s.catalog())
                    .and_then(|c| c.get(&id))
                    .cloned()
            });
            if let Some(product) = product {
                add_product_to_cart(&cart, &notifier, product);
            }
        })
    };

    // A fresh sorted copy on every render; the fetched catalog stays as fetched.
    let cards = move || -> Vec<ProductCard> {
        catalog.with(|state| {
            state
                .as_ref()
                .and_then(|s| s.catalog())
                .map(|c| render_cards(c, &sort.get()))
                .unwrap_or_default()
        })
    };
    let controls = move || SortControls::for_spec(sort.get());

    let toast = notifier.message();

    view! {
        {move || toast.get().map(|message| view! { <p class="notification">{message}</p> })}
        <header class="storefront-header">
            <span class="cart-count">{move || format!("Cart ({})", cart_count.get())}</span>
        </header>
        <Banner/>
        <Categories/>
        <div class="container">
            <h2>"Products"</h2>
            <div class="sort-controls">
                <label for="sort">"Sort by:"</label>
                <select
                    id="sort"
                    on:change=move |ev| {
                        if let Ok(field) = event_target_value(&ev).parse::<SortField>() {
                            sort.update(|s| s.field = field);
                        }
                    }
                >
                    {SortControls::for_spec(sort.get_untracked())
                        .options
                        .iter()
                        .map(|field| {
                            let field = *field;
                            view! {
                                <option
                                    value=field.as_str()
                                    selected=move || controls().selected == field
                                >
                                    {field.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button on:click=move |_| sort.update(|s| s.direction = s.direction.toggled())>
                    {move || controls().order_label}
                </button>
            </div>

            <div class="product-grid">
                {move || {
                    cards()
                        .into_iter()
                        .map(|card| view! { <ProductTile card=card add_to_cart=add_to_cart/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductTile(card: ProductCard, add_to_cart: Callback<ProductId>) -> impl IntoView {
    let id = card.id.clone();
    let navigate = use_navigate();
    let detail_path = card.detail_path.clone();

    view! {
        <div class="product-card">
            <img src=card.image_url alt=card.image_alt/>
            <div class="product-body">
                <h3>{card.name}</h3>
                <p>{card.description}</p>
                <div class="price">{card.price_label}</div>
                <div class="product-actions">
                    <button on:click=move |_| add_to_cart.call(id.clone())>
                        "+ Add to Cart"
                    </button>
                    <button on:click=move |_| navigate(&detail_path, Default::default())>
                        "View"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Detail route placeholder; the detail page itself lives elsewhere.
#[component]
fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    view! {
        <div class="app">
            <header>
                <h1>{move || format!("Product {}", product_id())}</h1>
                <A href=routes::HOME>"Back to Products"</A>
            </header>
        </div>
    }
}
