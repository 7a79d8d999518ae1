//! # Line Item
//!
//! A product paired with a quantity.
//!
//! ```text
//! Product: bottle of perfume, 47.50, imported
//! Quantity: 2
//!      │
//!      ├──► tax   = tax::calculate(product) × 2 = 7.15 × 2 = 14.30
//!      │
//!      └──► total = 47.50 × 2 + 14.30         = 109.30
//!
//! describe() ──► "2 imported bottle of perfume: 109.30"
//! ```
//!
//! Tax is rounded per unit and then multiplied, never rounded on the line.

use std::fmt;

use crate::money::Money;
use crate::tax;
use crate::types::Product;
use crate::IMPORT_MARKER;

/// A product × quantity entry of an order.
///
/// Quantity is not validated here; the parser rejects non-positive values,
/// but a directly constructed item with zero or negative quantity yields
/// zero or negative tax and total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    product: Product,
    quantity: i64,
}

impl LineItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        LineItem { product, quantity }
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price × quantity, before tax.
    pub fn subtotal(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// Tax for the whole line: per-unit tax × quantity.
    pub fn tax(&self) -> Money {
        tax::calculate(&self.product).multiply_quantity(self.quantity)
    }

    /// Price × quantity + tax.
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }

    /// Name as printed on the receipt, prefixed with `imported ` for
    /// imported goods.
    pub fn display_name(&self) -> String {
        if self.product.is_imported() {
            format!("{} {}", IMPORT_MARKER, self.product.name())
        } else {
            self.product.name().to_string()
        }
    }

    /// Receipt line: `"<quantity> <display name>: <total>"`.
    pub fn describe(&self) -> String {
        format!("{} {}: {}", self.quantity, self.display_name(), self.total())
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
