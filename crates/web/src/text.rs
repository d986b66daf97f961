//! Plain-text rendering of the storefront page for the headless binary.

use std::fmt::Write;

use storefront_cart::CartStore;

use crate::banner::Banner;
use crate::categories::CategoryBar;
use crate::notification::Notifier;
use crate::product_list::{LoadState, ProductListView};

pub fn render_page<C, N>(banner: &Banner, categories: &CategoryBar, view: &ProductListView<C, N>) -> String
where
    C: CartStore,
    N: Notifier,
{
    let mut out = String::new();

    if let Some(message) = view.notification() {
        let _ = writeln!(out, "[{message}]");
    }

    let _ = writeln!(out, "{} {}", banner.headline, banner.highlight);
    let _ = writeln!(out, "{}", banner.tagline);
    let _ = writeln!(out);

    let labels: Vec<String> = categories
        .categories()
        .iter()
        .map(|c| {
            if categories.is_selected(c) {
                format!("*{c}*")
            } else {
                c.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "Categories: {}", labels.join(" | "));
    let _ = writeln!(out);

    let controls = view.sort_controls();
    let _ = writeln!(out, "Products");
    let _ = writeln!(
        out,
        "Sort by: {} [{}]",
        controls.selected.label(),
        controls.order_label
    );

    if view.state().is_loading() {
        let _ = writeln!(out, "Loading...");
        return out;
    }
    if matches!(view.state(), LoadState::LoadFailed) {
        // Failed loads render like an empty catalog.
        return out;
    }

    for card in view.render() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}  ({})", card.name, card.detail_path);
        let _ = writeln!(out, "  {}", card.description);
        let _ = writeln!(out, "  {}", card.price_label);
    }

    out
}
