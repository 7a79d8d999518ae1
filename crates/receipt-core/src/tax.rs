//! # Tax Rules
//!
//! Basic sales tax and import duty for a single unit of a product.
//!
//! ```text
//! ┌──────────────────────┬──────────────┬──────────────┐
//! │                      │ not imported │   imported   │
//! ├──────────────────────┼──────────────┼──────────────┤
//! │ exempt (book, food,  │      0%      │      5%      │
//! │ medical)             │              │              │
//! ├──────────────────────┼──────────────┼──────────────┤
//! │ everything else      │     10%      │     15%      │
//! └──────────────────────┴──────────────┴──────────────┘
//!
//!  tax = ceil(price × rate / 0.05) × 0.05
//! ```

use crate::money::Money;
use crate::types::{Product, TaxRate};

/// Basic sales tax on all goods except exempt categories.
pub const BASIC_SALES_TAX: TaxRate = TaxRate::from_bps(1000);

/// Import duty on all imported goods, with no exemptions.
pub const IMPORT_DUTY: TaxRate = TaxRate::from_bps(500);

/// Tax amounts are rounded up to a multiple of this.
pub const ROUNDING_INCREMENT: Money = Money::from_cents(5);

/// Returns the combined rate that applies to `product`.
pub fn rate_for(product: &Product) -> TaxRate {
    let mut rate = TaxRate::zero();
    if !product.is_exempt() {
        rate = rate + BASIC_SALES_TAX;
    }
    if product.is_imported() {
        rate = rate + IMPORT_DUTY;
    }
    rate
}

/// Calculates the rounded tax for ONE unit of `product`.
///
/// ## Example
/// ```rust
/// use receipt_core::{tax, Money, Product};
///
/// let perfume = Product::new("bottle of perfume", Money::from_cents(4750), true, false);
/// assert_eq!(tax::calculate(&perfume).cents(), 715);
/// ```
pub fn calculate(product: &Product) -> Money {
    product
        .price()
        .tax_rounded_up(rate_for(product), ROUNDING_INCREMENT)
}

// =============================================================================
// Unit Tests
// =============================================================================
