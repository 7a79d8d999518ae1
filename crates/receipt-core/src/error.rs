//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ParseError       - Basket line could not be understood            │
//! │  ├── ValidationError  - Parsed value breaks a business rule            │
//! │  └── MoneyParseError  - Price token is not a decimal amount            │
//! │                                                                         │
//! │  receipt-cli errors (separate crate)                                   │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── AppError         - What main() reports before exiting             │
//! │                                                                         │
//! │  Flow: ValidationError → ParseError → line dropped (logged, not fatal) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending token in error messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// Reasons a basket line is rejected by the parser.
///
/// The caller drops rejected lines from the order; these variants exist so
/// the reason can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Line is empty or whitespace only.
    #[error("line is empty")]
    Empty,

    /// Fewer than `<quantity> <name> at <price>` tokens.
    #[error("expected at least 4 tokens, found {found}")]
    TooFewTokens { found: usize },

    /// No `at` token anywhere in the line.
    #[error("missing 'at' delimiter")]
    MissingDelimiter,

    /// First token is not an integer.
    #[error("quantity '{token}' is not a whole number")]
    InvalidQuantity { token: String },

    /// Last token is not a decimal amount.
    #[error("price '{token}' is not a decimal amount: {source}")]
    InvalidPrice {
        token: String,
        #[source]
        source: MoneyParseError,
    },

    /// Value parsed but violates a business rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Failure to read a decimal amount such as `"12.49"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("empty amount")]
    Empty,

    #[error("unexpected character '{0}'")]
    InvalidCharacter(char),

    #[error("more than one decimal point")]
    MultipleDecimalPoints,

    #[error("no digits")]
    NoDigits,

    #[error("amount is too large")]
    Overflow,
}

// =============================================================================
// Unit Tests
// =============================================================================
