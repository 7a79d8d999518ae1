//! # Receipt Entry Point
//!
//! ```text
//! $ printf '1 book at 12.49\n1 music CD at 14.99\n\n' | receipt
//! 1 book: 12.49
//! 1 music CD: 16.49
//! Sales Taxes: 1.50
//! Total: 28.98
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match receipt_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
