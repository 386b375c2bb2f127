use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pizzashop_core::{DomainError, DomainResult, ValueObject};

/// Field separator of the menu file.
pub const FIELD_SEPARATOR: char = ',';

/// A dish on the menu: name and unit price.
///
/// `quantity` is carried for order-taking screens; items loaded from the menu
/// file always start at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    quantity: u32,
    price: Decimal,
}

impl ValueObject for MenuItem {}

impl MenuItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Parse one line of the menu file (`name,price`).
    ///
    /// Blank lines yield `Ok(None)`. Tokens past the price are ignored.
    pub fn parse_line(line: &str) -> DomainResult<Option<Self>> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let mut tokens = line.split(FIELD_SEPARATOR);

        let name = tokens.next().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(DomainError::malformed(format!("menu line '{line}' has no name")));
        }

        let raw_price = tokens
            .next()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| DomainError::malformed(format!("menu line '{line}' has no price")))?;

        let price = Decimal::from_str(raw_price)
            .or_else(|_| Decimal::from_scientific(raw_price))
            .map_err(|e| DomainError::malformed(format!("menu price '{raw_price}': {e}")))?;

        if price <= Decimal::ZERO {
            return Err(DomainError::malformed(format!(
                "menu price for '{name}' must be positive, got {price}"
            )));
        }

        Ok(Some(Self::new(name, 0, price)))
    }
}

impl core::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}{}", self.name, FIELD_SEPARATOR, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_name_and_price_with_zero_quantity() {
        let item = MenuItem::parse_line("Margherita,25.5").unwrap().unwrap();
        assert_eq!(item.name(), "Margherita");
        assert_eq!(item.price(), dec("25.5"));
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let item = MenuItem::parse_line("  Quattro Stagioni , 32 \r").unwrap().unwrap();
        assert_eq!(item.name(), "Quattro Stagioni");
        assert_eq!(item.price(), dec("32"));
    }

    #[test]
    fn blank_line_is_skipped() {
        assert_eq!(MenuItem::parse_line("").unwrap(), None);
        assert_eq!(MenuItem::parse_line("   ").unwrap(), None);
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let item = MenuItem::parse_line("Diavola,30,spicy").unwrap().unwrap();
        assert_eq!(item.name(), "Diavola");
        assert_eq!(item.price(), dec("30"));
    }

    #[test]
    fn missing_price_is_malformed() {
        let err = MenuItem::parse_line("Calzone").unwrap_err();
        assert!(matches!(err, DomainError::Malformed(msg) if msg.contains("no price")));
    }

    #[test]
    fn unparseable_price_is_malformed() {
        let err = MenuItem::parse_line("Calzone,cheap").unwrap_err();
        assert!(matches!(err, DomainError::Malformed(_)));
    }

    #[test]
    fn scientific_notation_price_is_accepted() {
        let item = MenuItem::parse_line("Family Size,1e1").unwrap().unwrap();
        assert_eq!(item.price(), dec("10"));

        let item = MenuItem::parse_line("Slice,2.5E0").unwrap().unwrap();
        assert_eq!(item.price(), dec("2.5"));
    }

    #[test]
    fn non_positive_price_is_malformed() {
        assert!(MenuItem::parse_line("Water,0").is_err());
        assert!(MenuItem::parse_line("Refund,-3.5").is_err());
    }

    #[test]
    fn display_uses_file_format() {
        let item = MenuItem::new("Capricciosa", 0, dec("28.75"));
        assert_eq!(item.to_string(), "Capricciosa,28.75");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: parsing arbitrary text never panics; anything it
            /// accepts has a non-empty name and a positive price.
            #[test]
            fn parse_line_accepts_only_valid_items(line in ".{0,40}") {
                if let Ok(Some(item)) = MenuItem::parse_line(&line) {
                    prop_assert!(!item.name().is_empty());
                    prop_assert!(item.price() > Decimal::ZERO);
                    prop_assert_eq!(item.quantity(), 0);
                }
            }

            /// Property: a well-formed line keeps its name and cent price.
            #[test]
            fn well_formed_lines_parse(
                name in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]",
                cents in 1u32..1_000_000u32,
            ) {
                let price = Decimal::new(cents as i64, 2);
                let line = format!("{name},{price}");
                let item = MenuItem::parse_line(&line).unwrap().unwrap();
                prop_assert_eq!(item.name(), name.as_str());
                prop_assert_eq!(item.price(), price);
            }
        }
    }
}
