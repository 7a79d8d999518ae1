//! # receipt-core: Pure Business Logic for Sales Tax Receipts
//!
//! This crate turns shopping basket lines into a receipt. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "1 imported bottle of perfume at 47.50"                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LineParser::parse ──► ParsedLine ──► Product + LineItem                │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                         tax::calculate (10% basic, 5% import duty,      │
//! │                                         rounded UP to 0.05)             │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                         Order ──► "1 imported bottle of perfume: 54.65" │
//! │                                   "Sales Taxes: 7.15"                   │
//! │                                   "Total: 54.65"                        │
//! │                                                                         │
//! │   NO I/O • NO FLOATING POINT MONEY • PURE FUNCTIONS                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (TaxRate, ExemptionKeywords, Product)
//! - [`tax`] - Basic sales tax and import duty rules
//! - [`validation`] - Business rule validation
//! - [`parser`] - Basket line parsing
//! - [`line_item`] - Product × quantity with derived tax and total
//! - [`order`] - Aggregated totals and receipt rendering
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{ExemptionKeywords, LineParser, Order};
//!
//! let parser = LineParser::new(ExemptionKeywords::default());
//! let order: Order = ["2 book at 12.49", "1 music CD at 14.99", "1 chocolate bar at 0.85"]
//!     .iter()
//!     .filter_map(|line| parser.parse(line).ok())
//!     .map(|parsed| parsed.into_line_item())
//!     .collect();
//!
//! assert_eq!(
//!     order.render_receipt(),
//!     "2 book: 24.98\n1 music CD: 16.49\n1 chocolate bar: 0.85\nSales Taxes: 1.50\nTotal: 42.32"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod line_item;
pub mod money;
pub mod order;
pub mod parser;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{MoneyParseError, ParseError, ValidationError};
pub use line_item::LineItem;
pub use money::Money;
pub use order::Order;
pub use parser::{LineParser, ParsedLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Token that marks a product as imported when it directly follows the quantity.
pub const IMPORT_MARKER: &str = "imported";

/// Token separating the product description from the unit price.
pub const PRICE_DELIMITER: &str = "at";

/// Keywords that exempt a product from basic sales tax when no config overrides them.
///
/// Covers the three exempt categories: books, food and medical products.
pub const DEFAULT_EXEMPT_KEYWORDS: [&str; 5] = ["book", "chocolate", "pill", "medicine", "headache"];

/// Maximum quantity accepted on a single basket line.
///
/// Keeps `price × quantity` and the taxed total well inside `i64` cents.
pub const MAX_ITEM_QUANTITY: i64 = 100_000;

/// Maximum unit price accepted from input, in cents (1,000,000.00).
pub const MAX_UNIT_PRICE_CENTS: i64 = 100_000_000;
