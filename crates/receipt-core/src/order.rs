//! # Order
//!
//! An ordered sequence of line items with derived totals and the receipt.
//!
//! ## Receipt Layout
//! ```text
//! ┌────────────────────────────────────────┐
//! │ 2 book: 24.98                          │ ◄── one line per item,
//! │ 1 music CD: 16.49                      │     in input order
//! │ 1 chocolate bar: 0.85                  │
//! │ Sales Taxes: 1.50                      │ ◄── Σ item tax
//! │ Total: 42.32                           │ ◄── Σ item total
//! └────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::line_item::LineItem;
use crate::money::Money;

/// Line items of one receipt. Built once; totals are always derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    line_items: Vec<LineItem>,
}

impl Order {
    pub fn new(line_items: Vec<LineItem>) -> Self {
        Order { line_items }
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Sum of price × quantity before tax.
    pub fn subtotal(&self) -> Money {
        self.line_items.iter().map(LineItem::subtotal).sum()
    }

    /// Sum of line item taxes. Zero for an empty order.
    pub fn total_tax(&self) -> Money {
        self.line_items.iter().map(LineItem::tax).sum()
    }

    /// Sum of line item totals. Zero for an empty order.
    pub fn total_amount(&self) -> Money {
        self.line_items.iter().map(LineItem::total).sum()
    }

    /// Receipt lines: every item, then `Sales Taxes:` and `Total:`.
    pub fn receipt_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.line_items.iter().map(LineItem::describe).collect();
        lines.push(format!("Sales Taxes: {}", self.total_tax()));
        lines.push(format!("Total: {}", self.total_amount()));
        lines
    }

    /// Receipt as one string, lines separated by `\n` (no trailing newline).
    pub fn render_receipt(&self) -> String {
        self.receipt_lines().join("\n")
    }
}

impl FromIterator<LineItem> for Order {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Order::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_receipt())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
