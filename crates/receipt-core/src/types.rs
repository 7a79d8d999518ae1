//! # Domain Types
//!
//! Core domain types used throughout the receipt pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │  ExemptionKeywords  │   │    TaxRate      │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  name           │◄──│  "book"             │   │  bps (u32)      │   │
//! │  │  price (Money)  │   │  "chocolate"        │   │  1000 = 10%     │   │
//! │  │  imported       │   │  "pill" ...         │   │  500  = 5%      │   │
//! │  │  exempt         │   └─────────────────────┘   └─────────────────┘   │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  `exempt` is resolved ONCE when the Product is built.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::money::Money;
use crate::DEFAULT_EXEMPT_KEYWORDS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so every rate this system uses
/// (0%, 5%, 10%, 15%) is an exact integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Rates stack: basic sales tax + import duty.
impl Add for TaxRate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TaxRate(self.0 + other.0)
    }
}

// =============================================================================
// Exemption Keywords
// =============================================================================

/// Keywords that mark a product as exempt from basic sales tax.
///
/// A product is exempt when its name contains any keyword as a
/// case-sensitive substring, so `"chocolate"` also matches
/// `"box of chocolates"`.
///
/// Loaded once at startup (see the CLI config) and injected into the
/// [`LineParser`](crate::parser::LineParser); never re-read per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExemptionKeywords(Vec<String>);

impl ExemptionKeywords {
    /// Builds a keyword set, trimming entries and discarding blank ones.
    ///
    /// A blank keyword would be a substring of every name and exempt
    /// everything.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            if !keyword.is_empty() && !kept.iter().any(|k| k == keyword) {
                kept.push(keyword.to_string());
            }
        }
        ExemptionKeywords(kept)
    }

    /// Returns true if `name` contains any keyword.
    pub fn matches(&self, name: &str) -> bool {
        self.0.iter().any(|keyword| name.contains(keyword.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExemptionKeywords {
    fn default() -> Self {
        ExemptionKeywords::new(DEFAULT_EXEMPT_KEYWORDS)
    }
}

impl From<Vec<String>> for ExemptionKeywords {
    fn from(keywords: Vec<String>) -> Self {
        ExemptionKeywords::new(keywords)
    }
}

impl From<ExemptionKeywords> for Vec<String> {
    fn from(keywords: ExemptionKeywords) -> Self {
        keywords.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable good. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    price: Money,
    imported: bool,
    exempt: bool,
}

impl Product {
    /// Creates a product with an explicit exemption flag.
    pub fn new(name: impl Into<String>, price: Money, imported: bool, exempt: bool) -> Self {
        Product {
            name: name.into(),
            price,
            imported,
            exempt,
        }
    }

    /// Creates a product, deriving exemption from the keyword set.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::{ExemptionKeywords, Money, Product};
    ///
    /// let keywords = ExemptionKeywords::default();
    /// let pills = Product::classify("packet of headache pills", Money::from_cents(975), false, &keywords);
    /// assert!(pills.is_exempt());
    ///
    /// let perfume = Product::classify("bottle of perfume", Money::from_cents(1899), false, &keywords);
    /// assert!(!perfume.is_exempt());
    /// ```
    pub fn classify(
        name: impl Into<String>,
        price: Money,
        imported: bool,
        keywords: &ExemptionKeywords,
    ) -> Self {
        let name = name.into();
        let exempt = keywords.matches(&name);
        Product::new(name, price, imported, exempt)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn is_imported(&self) -> bool {
        self.imported
    }

    /// Exempt from basic sales tax (import duty still applies).
    #[inline]
    pub fn is_exempt(&self) -> bool {
        self.exempt
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
