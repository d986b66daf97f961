//! Product price value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// Non-negative price, held in the smallest currency unit (cents).
///
/// Wire amounts finer than a cent are rounded to the nearest cent.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Build a price from a major-unit amount (e.g. `10.5` → 1050 cents).
    pub fn from_major(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {amount})"
            )));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation("price is out of range"));
        }
        Ok(Self {
            cents: cents as u64,
        })
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price {
            cents: self.cents.saturating_add(other.cents),
        }
    }
}

impl core::fmt::Display for Price {
    /// Whole amounts print without a fraction (`10`), others with two digits (`10.50`).
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let major = self.cents / 100;
        let minor = self.cents % 100;
        if minor == 0 {
            write!(f, "{major}")
        } else {
            write!(f, "{major}.{minor:02}")
        }
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.cents as f64 / 100.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WirePrice {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = match WirePrice::deserialize(deserializer)? {
            WirePrice::Number(n) => n,
            WirePrice::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| serde::de::Error::custom(format!("invalid price {s:?}: {e}")))?,
        };
        Price::from_major(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_drops_zero_cents() {
        assert_eq!(Price::from_cents(1000).to_string(), "10");
        assert_eq!(Price::from_cents(1050).to_string(), "10.50");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn from_major_rounds_to_cents() {
        assert_eq!(Price::from_major(19.99).unwrap().cents(), 1999);
        assert_eq!(Price::from_major(5.0).unwrap().cents(), 500);
    }

    #[test]
    fn sub_cent_amounts_round_to_nearest_cent() {
        let odd: Price = serde_json::from_str("10.999").unwrap();
        let short: Price = serde_json::from_str("9.9").unwrap();
        assert_eq!(odd.to_string(), "11");
        assert_eq!(short.to_string(), "9.90");
    }

    #[test]
    fn negative_and_nan_prices_are_rejected() {
        assert!(matches!(
            Price::from_major(-0.01),
            Err(DomainError::Validation(_))
        ));
        assert!(Price::from_major(f64::NAN).is_err());
    }

    #[test]
    fn deserializes_numbers_and_numeric_strings() {
        let a: Price = serde_json::from_str("10").unwrap();
        let b: Price = serde_json::from_str("\"10.00\"").unwrap();
        let c: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(a, b);
        assert_eq!(c.cents(), 1250);
        assert!(serde_json::from_str::<Price>("-3").is_err());
        assert!(serde_json::from_str::<Price>("\"cheap\"").is_err());
    }

    #[test]
    fn sum_adds_cents() {
        let total: Price = [Price::from_cents(150), Price::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(400));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-negative cent amount survives a trip through its display form.
            #[test]
            fn display_parses_back(cents in 0u64..10_000_000) {
                let price = Price::from_cents(cents);
                let parsed: f64 = price.to_string().parse().unwrap();
                prop_assert_eq!(Price::from_major(parsed).unwrap(), price);
            }
        }
    }
}
