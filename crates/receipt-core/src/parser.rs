//! # Line Parser
//!
//! Converts one free-text basket line into a [`ParsedLine`].
//!
//! ## Line Grammar
//! ```text
//!   <quantity> [imported] <product words...> <word> <price>
//!   ─────┬──── ────┬───── ─────────┬──────── ──┬─── ───┬───
//!        │         │               │           │       └── last token, decimal > 0
//!        │         │               │           └────────── dropped, normally "at"
//!        │         │               └────────────────────── one or more tokens, may
//!        │         │                                       contain "at" or "imported"
//!        │         └────────────────────────────────────── only right after quantity
//!        └──────────────────────────────────────────────── first token, integer > 0
//! ```
//!
//! The line must contain an `at` token somewhere, but fields are located by
//! position alone: quantity is the first token, price the last, and the
//! name is everything between the quantity and the second to last token.
//! So `"1 chocolate at the station at 5.00"` names the product
//! `"chocolate at the station"` and `"2 cups at home 5.00"` names it
//! `"cups at"`.

use crate::error::ParseError;
use crate::line_item::LineItem;
use crate::money::Money;
use crate::types::{ExemptionKeywords, Product};
use crate::validation::{validate_price, validate_product_name, validate_quantity};
use crate::{IMPORT_MARKER, PRICE_DELIMITER};

/// Minimum tokens in a valid line: quantity, one name word, `at`, price.
const MIN_TOKENS: usize = 4;

/// Structured result of parsing one basket line.
///
/// Transient: consumed by [`ParsedLine::into_line_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub quantity: i64,
    pub price: Money,
    pub imported: bool,
    pub exempt: bool,
    pub product_name: String,
}

impl ParsedLine {
    /// Builds the product and line item. Exemption was resolved by the
    /// parser and is carried over as-is.
    pub fn into_line_item(self) -> LineItem {
        let product = Product::new(self.product_name, self.price, self.imported, self.exempt);
        LineItem::new(product, self.quantity)
    }
}

/// Parses basket lines against a fixed set of exemption keywords.
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    keywords: ExemptionKeywords,
}

impl LineParser {
    pub fn new(keywords: ExemptionKeywords) -> Self {
        LineParser { keywords }
    }

    /// Parses one line.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::{LineParser, Money};
    ///
    /// let parser = LineParser::default();
    /// let parsed = parser.parse("2 imported boxes of chocolates at 11.25").unwrap();
    ///
    /// assert_eq!(parsed.quantity, 2);
    /// assert_eq!(parsed.price, Money::from_cents(1125));
    /// assert!(parsed.imported);
    /// assert!(parsed.exempt);
    /// assert_eq!(parsed.product_name, "boxes of chocolates");
    ///
    /// assert!(parser.parse("1 at 12.49").is_err());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<ParsedLine, ParseError> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        if tokens.len() < MIN_TOKENS {
            return Err(ParseError::TooFewTokens {
                found: tokens.len(),
            });
        }

        if !tokens.contains(&PRICE_DELIMITER) {
            return Err(ParseError::MissingDelimiter);
        }

        // len >= MIN_TOKENS, so each split below has something to take
        let (quantity_token, rest) = tokens.split_first().ok_or(ParseError::Empty)?;
        let (price_token, rest) = rest.split_last().ok_or(ParseError::Empty)?;
        let (_, description) = rest.split_last().ok_or(ParseError::Empty)?;

        let quantity: i64 = quantity_token
            .parse()
            .map_err(|_| ParseError::InvalidQuantity {
                token: quantity_token.to_string(),
            })?;
        validate_quantity(quantity)?;

        let price: Money = price_token
            .parse()
            .map_err(|source| ParseError::InvalidPrice {
                token: price_token.to_string(),
                source,
            })?;
        validate_price(price)?;

        let (imported, name_tokens) = match description.split_first() {
            Some((first, remaining)) if *first == IMPORT_MARKER => (true, remaining),
            _ => (false, description),
        };

        let product_name = name_tokens.join(" ");
        validate_product_name(&product_name)?;

        let exempt = self.keywords.matches(&product_name);

        Ok(ParsedLine {
            quantity,
            price,
            imported,
            exempt,
            product_name,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::{MAX_ITEM_QUANTITY, MAX_UNIT_PRICE_CENTS};

    fn parse(line: &str) -> Result<ParsedLine, ParseError> {
        LineParser::default().parse(line)
    }

    fn parsed(quantity: i64, cents: i64, imported: bool, exempt: bool, name: &str) -> ParsedLine {
        ParsedLine {
            quantity,
            price: Money::from_cents(cents),
            imported,
            exempt,
            product_name: name.to_string(),
        }
    }

    #[test]
    fn test_parse_simple_product() {
        assert_eq!(parse("1 book at 12.49"), Ok(parsed(1, 1249, false, true, "book")));
    }

    #[test]
    fn test_parse_imported_product() {
        assert_eq!(
            parse("1 imported bottle of perfume at 47.50"),
            Ok(parsed(1, 4750, true, false, "bottle of perfume"))
        );
        assert_eq!(
            parse("3 imported luxury chocolate boxes at 25.00"),
            Ok(parsed(3, 2500, true, true, "luxury chocolate boxes"))
        );
    }

    #[test]
    fn test_parse_multi_word_names() {
        assert_eq!(
            parse("1 music CD at 14.99"),
            Ok(parsed(1, 1499, false, false, "music CD"))
        );
        assert_eq!(
            parse("1 packet of headache pills at 9.75"),
            Ok(parsed(1, 975, false, true, "packet of headache pills"))
        );
    }

    #[test]
    fn test_parse_price_without_decimals() {
        assert_eq!(parse("1 book at 10"), Ok(parsed(1, 1000, false, true, "book")));
    }

    #[test]
    fn test_parse_price_with_extra_precision() {
        assert_eq!(parse("1 item at 12.999999"), Ok(parsed(1, 1300, false, false, "item")));
    }

    #[test]
    fn test_parse_large_values() {
        assert_eq!(parse("9999 books at 12.49"), Ok(parsed(9999, 1249, false, true, "books")));
        assert_eq!(
            parse("1 luxury item at 999999.99"),
            Ok(parsed(1, 99_999_999, false, false, "luxury item"))
        );
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        assert_eq!(parse("1   book   at   12.49"), Ok(parsed(1, 1249, false, true, "book")));
        assert_eq!(parse("\t2 book at 12.49  \r"), Ok(parsed(2, 1249, false, true, "book")));
    }

    #[test]
    fn test_parse_at_inside_name() {
        assert_eq!(
            parse("1 chocolate at the station at 5.00"),
            Ok(parsed(1, 500, false, true, "chocolate at the station"))
        );
    }

    #[test]
    fn test_parse_imported_inside_name() {
        assert_eq!(
            parse("1 imported bottle of imported perfume at 47.50"),
            Ok(parsed(1, 4750, true, false, "bottle of imported perfume"))
        );

        // Only the token right after the quantity marks the line as imported
        assert_eq!(
            parse("1 bottle of imported perfume at 47.50"),
            Ok(parsed(1, 4750, false, false, "bottle of imported perfume"))
        );
    }

    #[test]
    fn test_parse_very_long_name() {
        let name = "very special limited edition collectors item with extra features";
        assert_eq!(
            parse(&format!("1 {name} at 999.99")),
            Ok(parsed(1, 99_999, false, false, name))
        );
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_rejects_short_lines() {
        assert_eq!(parse("1 at 12.49"), Err(ParseError::TooFewTokens { found: 3 }));
        assert_eq!(parse("1    at 12.49"), Err(ParseError::TooFewTokens { found: 3 }));
        assert_eq!(parse("1 book 12.49"), Err(ParseError::TooFewTokens { found: 3 }));
    }

    #[test]
    fn test_parse_name_is_positional() {
        // "at" only has to be present; the token before the price is dropped
        assert_eq!(parse("2 cups at home 5.00"), Ok(parsed(2, 500, false, false, "cups at")));
        assert_eq!(
            parse("1 imported book at shop 3.00"),
            Ok(parsed(1, 300, true, true, "book at"))
        );
    }

    #[test]
    fn test_parse_rejects_missing_delimiter() {
        assert_eq!(parse("1 music CD 14.99"), Err(ParseError::MissingDelimiter));
        assert_eq!(parse("1 music CD for 14.99"), Err(ParseError::MissingDelimiter));
    }

    #[test]
    fn test_parse_rejects_trailing_word_after_price() {
        assert!(matches!(
            parse("1 book at 12.49 each"),
            Err(ParseError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_quantity() {
        assert!(matches!(
            parse("one book at 12.49"),
            Err(ParseError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            parse("book 1 at 12.49"),
            Err(ParseError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            parse("1.5 book at 12.49"),
            Err(ParseError::InvalidQuantity { .. })
        ));

        let non_positive = Err(ParseError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }));
        assert_eq!(parse("0 book at 12.49"), non_positive);
        assert_eq!(parse("-1 book at 12.49"), non_positive);
    }

    #[test]
    fn test_parse_rejects_bad_price() {
        assert!(matches!(
            parse("1 book at twelve"),
            Err(ParseError::InvalidPrice { .. })
        ));

        let non_positive = Err(ParseError::Validation(ValidationError::MustBePositive {
            field: "price".to_string(),
        }));
        assert_eq!(parse("1 book at 0"), non_positive);
        assert_eq!(parse("1 book at -12.49"), non_positive);
    }

    #[test]
    fn test_parse_rejects_out_of_range_values() {
        assert_eq!(
            parse("9223372036854775807 book at 2.00"),
            Err(ParseError::Validation(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_ITEM_QUANTITY,
            }))
        );
        assert_eq!(
            parse("1 book at 1000000.01"),
            Err(ParseError::Validation(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 1,
                max: MAX_UNIT_PRICE_CENTS,
            }))
        );
        assert!(matches!(
            parse("1 book at 92233720368547758.08"),
            Err(ParseError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_largest_accepted_line_totals_without_overflow() {
        let item = parse("100000 bottle of perfume at 1000000.00")
            .unwrap()
            .into_line_item();

        assert_eq!(item.subtotal(), Money::from_cents(10_000_000_000_000));
        assert_eq!(item.tax(), Money::from_cents(1_000_000_000_000));
        assert_eq!(item.total(), Money::from_cents(11_000_000_000_000));
    }

    #[test]
    fn test_parse_rejects_missing_name() {
        assert_eq!(
            parse("1 imported at 12.49"),
            Err(ParseError::Validation(ValidationError::Required {
                field: "product name".to_string()
            }))
        );
    }

    #[test]
    fn test_parse_uses_injected_keywords() {
        let parser = LineParser::new(ExemptionKeywords::new(["CD"]));
        assert!(parser.parse("1 music CD at 14.99").unwrap().exempt);
        assert!(!parser.parse("1 book at 12.49").unwrap().exempt);
    }

    #[test]
    fn test_keyword_match_ignores_import_marker() {
        let parser = LineParser::new(ExemptionKeywords::new(["imported"]));
        assert!(!parser.parse("1 imported perfume at 10.00").unwrap().exempt);
    }

    #[test]
    fn test_into_line_item() {
        let item = parse("2 imported box of chocolates at 10.00")
            .unwrap()
            .into_line_item();

        assert_eq!(item.quantity(), 2);
        assert_eq!(item.product().name(), "box of chocolates");
        assert!(item.product().is_imported());
        assert!(item.product().is_exempt());
    }
}
