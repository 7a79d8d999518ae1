//! # Receipt CLI Library
//!
//! Wiring for the `receipt` binary. Everything here is I/O and setup; the
//! business logic lives in `receipt-core`.
//!
//! ## Module Organization
//! ```text
//! receipt_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Exemption keyword config (env, file, defaults)
//! ├── basket.rs       ◄─── stdin reading, checkout, receipt writing
//! └── error.rs        ◄─── AppError reported by main()
//! ```

pub mod basket;
pub mod config;
pub mod error;

use std::io;

use receipt_core::LineParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ReceiptConfig;
use crate::error::AppResult;

/// Runs the CLI: stdin basket in, receipt out.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ── stderr, RUST_LOG overrides (default: warn)    │
/// │  2. Load Config ───────── env → config.json → defaults                  │
/// │  3. Read Basket ───────── stdin until blank line / EOF                  │
/// │  4. Checkout ──────────── parse lines, drop invalid ones                │
/// │  5. Print Receipt ─────── stdout                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = ReceiptConfig::load()?;
    info!(keywords = config.exempt_keywords.len(), "Configuration loaded");

    let parser = LineParser::new(config.exempt_keywords);

    let lines = basket::read_basket(io::stdin().lock())?;
    let order = basket::checkout(&lines, &parser);
    info!(
        read = lines.len(),
        accepted = order.len(),
        "Basket checked out"
    );

    basket::write_receipt(io::stdout().lock(), &order)?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show dropped basket lines
/// - `RUST_LOG=receipt_cli=info` - Startup summary only
/// - Default: WARN, so a plain run prints nothing but the receipt
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
