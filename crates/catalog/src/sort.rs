//! Client-side product ordering.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

use crate::product::Product;

/// Field a product list can be ordered by.
///
/// The comparator works on any of these, but the grid only offers
/// [`SortField::SELECTABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Title,
    Name,
    Description,
}

impl SortField {
    pub const SELECTABLE: &'static [SortField] = &[SortField::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Name => "name",
            SortField::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Title => "Title",
            SortField::Name => "Name",
            SortField::Description => "Description",
        }
    }

    /// Lowercased comparison key of `product` for this field.
    pub fn key(&self, product: &Product) -> String {
        let raw = match self {
            SortField::Title if product.title().is_empty() => product.name(),
            SortField::Title => product.title(),
            SortField::Name => product.name(),
            SortField::Description => product.description(),
        };
        raw.to_lowercase()
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "name" => Ok(SortField::Name),
            "description" => Ok(SortField::Description),
            other => Err(DomainError::validation(format!("unknown sort field: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Field selector plus direction; defaults to title ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        self.direction
            .apply(self.field.key(a).cmp(&self.field.key(b)))
    }
}

/// Order `products` by `spec` without touching the input slice.
pub fn sorted<'a>(products: &'a [Product], spec: &SortSpec) -> Vec<&'a Product> {
    let mut keyed: Vec<(String, &Product)> = products
        .iter()
        .map(|p| (spec.field.key(p), p))
        .collect();
    keyed.sort_by(|(ka, _), (kb, _)| spec.direction.apply(ka.cmp(kb)));
    keyed.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Price;

    fn titled(id: u64, title: &str) -> Product {
        Product::new(id, title, Price::from_cents(100))
    }

    fn titles(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.title().to_string()).collect()
    }

    #[test]
    fn ascending_is_case_insensitive() {
        let products = vec![titled(1, "Banana"), titled(2, "apple")];
        let out = sorted(&products, &SortSpec::default());
        assert_eq!(titles(&out), vec!["apple", "Banana"]);
    }

    #[test]
    fn descending_inverts_the_comparator() {
        let products = vec![titled(1, "apple"), titled(2, "Cherry"), titled(3, "banana")];
        let spec = SortSpec::new(SortField::Title, SortDirection::Descending);
        assert_eq!(titles(&sorted(&products, &spec)), vec!["Cherry", "banana", "apple"]);
    }

    #[test]
    fn title_key_falls_back_to_name() {
        let untitled = Product::new(1, "", Price::ZERO).with_name("Mango");
        let products = vec![titled(2, "Peach"), untitled];
        let out = sorted(&products, &SortSpec::default());
        assert_eq!(out[0].display_name(), "Mango");
    }

    #[test]
    fn other_fields_are_sortable() {
        let products = vec![
            titled(1, "a").with_name("Zed"),
            titled(2, "b").with_name("amy"),
        ];
        let spec = SortSpec::new(SortField::Name, SortDirection::Ascending);
        let out = sorted(&products, &spec);
        assert_eq!(out[0].name(), "amy");
    }

    #[test]
    fn compare_matches_sorted_order() {
        let a = titled(1, "apple");
        let b = titled(2, "BANANA");
        let asc = SortSpec::default();
        let desc = SortSpec::new(SortField::Title, SortDirection::Descending);

        assert_eq!(asc.compare(&a, &b), Ordering::Less);
        assert_eq!(desc.compare(&a, &b), Ordering::Greater);
        assert_eq!(asc.compare(&a, &titled(3, "APPLE")), Ordering::Equal);
    }

    #[test]
    fn toggled_flips_direction() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn only_title_is_selectable() {
        assert_eq!(SortField::SELECTABLE, &[SortField::Title]);
        assert_eq!("Title".parse::<SortField>().unwrap(), SortField::Title);
        assert!("price".parse::<SortField>().is_err());
    }

    #[test]
    fn direction_serializes_as_asc_desc() {
        assert_eq!(serde_json::to_string(&SortDirection::Ascending).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&SortDirection::Descending).unwrap(), "\"desc\"");
    }

    mod proptest_tests {
        use super::*;
        use proptest::collection::hash_set;
        use proptest::prelude::*;

        fn catalog_from(titles: Vec<String>) -> Vec<Product> {
            titles
                .into_iter()
                .enumerate()
                .map(|(i, t)| titled(i as u64, &t))
                .collect()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: without duplicate keys, descending order is the exact reverse of ascending.
            #[test]
            fn descending_reverses_ascending(keys in hash_set("[a-z]{1,12}", 1..30)) {
                let products = catalog_from(keys.into_iter().collect());

                let asc = sorted(&products, &SortSpec::new(SortField::Title, SortDirection::Ascending));
                let mut desc = sorted(&products, &SortSpec::new(SortField::Title, SortDirection::Descending));
                desc.reverse();

                prop_assert_eq!(titles(&asc), titles(&desc));
            }

            /// Property: changing letter case never changes the order.
            #[test]
            fn case_does_not_affect_order(keys in hash_set("[a-z]{1,12}", 1..30), flip in any::<u64>()) {
                let lower: Vec<String> = keys.into_iter().collect();
                let mixed: Vec<String> = lower
                    .iter()
                    .enumerate()
                    .map(|(i, k)| if (flip >> (i % 64)) & 1 == 1 { k.to_uppercase() } else { k.clone() })
                    .collect();

                let spec = SortSpec::default();
                let a = catalog_from(lower);
                let b = catalog_from(mixed);
                let ids_a: Vec<_> = sorted(&a, &spec).iter().map(|p| p.id_typed().clone()).collect();
                let ids_b: Vec<_> = sorted(&b, &spec).iter().map(|p| p.id_typed().clone()).collect();

                prop_assert_eq!(ids_a, ids_b);
            }

            /// Property: sorting never reorders the source slice.
            #[test]
            fn input_is_untouched(keys in proptest::collection::vec("[A-Za-z]{0,8}", 0..30)) {
                let products = catalog_from(keys);
                let before = products.clone();
                let _ = sorted(&products, &SortSpec::new(SortField::Title, SortDirection::Descending));
                prop_assert_eq!(products, before);
            }
        }
    }
}
