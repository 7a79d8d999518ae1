//! # Application Error
//!
//! Errors that stop the CLI before a receipt is printed.
//!
//! ```text
//! ConfigError ──┐
//!               ├──► AppError ──► main(): "error: ..." on stderr, exit 1
//! io::Error ────┘
//! ```
//!
//! Malformed basket lines never reach this type: they are dropped during
//! checkout.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
