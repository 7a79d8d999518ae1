//! Property-based tests for tax rounding, line item and order totals.
//!
//! 1. **Ceiling**: tax is a multiple of 0.05 at or above the raw value,
//!    and less than 0.05 above it
//! 2. **Monotonicity**: tax never decreases as the price grows
//! 3. **Line identity**: `total == price × quantity + tax`
//! 4. **Additivity**: order totals over `a ++ b` equal the sums of both parts
//! 5. **Idempotence**: rendering twice yields identical text
//! 6. **Parse postconditions**: accepted lines have in-range quantity and
//!    price and a trimmed, non-empty name

use proptest::prelude::*;
use receipt_core::{
    tax, LineItem, LineParser, Money, Order, Product, MAX_ITEM_QUANTITY, MAX_UNIT_PRICE_CENTS,
};

fn product_strategy() -> impl Strategy<Value = Product> {
    ("[a-z]{1,12}( [a-z]{1,12}){0,3}", 1i64..10_000_000, any::<bool>(), any::<bool>()).prop_map(
        |(name, cents, imported, exempt)| Product::new(name, Money::from_cents(cents), imported, exempt),
    )
}

fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (product_strategy(), 1i64..1_000).prop_map(|(product, quantity)| LineItem::new(product, quantity))
}

proptest! {
    #[test]
    fn prop_tax_is_ceiling_to_five_cents(product in product_strategy()) {
        let tax = tax::calculate(&product).cents();
        let bps = i128::from(tax::rate_for(&product).bps());

        // raw tax in units of 1/10000 cent
        let raw = i128::from(product.price().cents()) * bps;
        let rounded = i128::from(tax) * 10_000;

        prop_assert_eq!(tax % 5, 0);
        prop_assert!(rounded >= raw);
        prop_assert!(rounded - raw < 5 * 10_000);
    }

    #[test]
    fn prop_tax_is_monotonic_in_price(
        low in 0i64..10_000_000,
        delta in 0i64..1_000_000,
        imported in any::<bool>(),
        exempt in any::<bool>(),
    ) {
        let cheap = Product::new("item", Money::from_cents(low), imported, exempt);
        let dear = Product::new("item", Money::from_cents(low + delta), imported, exempt);
        prop_assert!(tax::calculate(&cheap) <= tax::calculate(&dear));
    }

    #[test]
    fn prop_line_total_is_price_times_quantity_plus_tax(item in line_item_strategy()) {
        let expected = item.product().price() * item.quantity() + item.tax();
        prop_assert_eq!(item.total(), expected);
    }

    #[test]
    fn prop_order_totals_are_additive(
        left in prop::collection::vec(line_item_strategy(), 0..8),
        right in prop::collection::vec(line_item_strategy(), 0..8),
    ) {
        let a = Order::new(left.clone());
        let b = Order::new(right.clone());
        let both: Order = left.into_iter().chain(right).collect();

        prop_assert_eq!(both.total_tax(), a.total_tax() + b.total_tax());
        prop_assert_eq!(both.total_amount(), a.total_amount() + b.total_amount());
    }

    #[test]
    fn prop_render_is_idempotent(items in prop::collection::vec(line_item_strategy(), 0..8)) {
        let order = Order::new(items);
        let lines = order.receipt_lines();

        prop_assert_eq!(order.render_receipt(), order.render_receipt());
        prop_assert_eq!(lines.len(), order.len() + 2);
    }

    #[test]
    fn prop_parsed_lines_meet_postconditions(line in "[ 0-9a-z.]{0,40}") {
        if let Ok(parsed) = LineParser::default().parse(&line) {
            prop_assert!(parsed.quantity > 0 && parsed.quantity <= MAX_ITEM_QUANTITY);
            prop_assert!(parsed.price.is_positive());
            prop_assert!(parsed.price.cents() <= MAX_UNIT_PRICE_CENTS);
            prop_assert!(!parsed.product_name.is_empty());
            prop_assert_eq!(parsed.product_name.trim(), parsed.product_name.as_str());
        }
    }

    #[test]
    fn prop_well_formed_lines_parse(
        quantity in 1i64..10_000,
        cents in 1i64..100_000_000,
        imported in any::<bool>(),
        name in "[a-z]{1,10}( [a-z]{1,10}){0,3}",
    ) {
        prop_assume!(name.split(' ').next() != Some("imported"));

        let price = Money::from_cents(cents);
        let marker = if imported { "imported " } else { "" };
        let line = format!("{quantity} {marker}{name} at {price}");

        let parsed = LineParser::default().parse(&line).unwrap();
        prop_assert_eq!(parsed.quantity, quantity);
        prop_assert_eq!(parsed.price, price);
        prop_assert_eq!(parsed.imported, imported);
        prop_assert_eq!(parsed.product_name, name);
    }
}
