//! # Basket I/O
//!
//! Reading basket lines, turning them into an [`Order`], and writing the
//! receipt.
//!
//! ```text
//! stdin ──► read_basket ──► Vec<String> ──► checkout ──► Order ──► write_receipt ──► stdout
//!           (stops at the          (drops lines the
//!            first blank line)      parser rejects)
//! ```

use std::io::{self, BufRead, Write};

use receipt_core::{LineParser, Order};
use tracing::debug;

/// Reads lines until the first blank line or end of input.
///
/// Lines are split on raw `\n` bytes, so a line that is not valid UTF-8 is
/// skipped instead of aborting the whole basket.
pub fn read_basket<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw);

        let line = match std::str::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => {
                debug!(line = index + 1, reason = %err, "Skipping line that is not UTF-8");
                continue;
            }
        };

        if line.trim().is_empty() {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}

/// Parses every line and collects the accepted ones, in input order.
///
/// Rejected lines are left out of the order without failing the batch.
pub fn checkout<S: AsRef<str>>(lines: &[S], parser: &LineParser) -> Order {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| match parser.parse(line.as_ref()) {
            Ok(parsed) => Some(parsed.into_line_item()),
            Err(err) => {
                debug!(line = index + 1, reason = %err, "Dropping basket line");
                None
            }
        })
        .collect()
}

/// Writes the receipt, one line per entry.
pub fn write_receipt<W: Write>(mut writer: W, order: &Order) -> io::Result<()> {
    for line in order.receipt_lines() {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

// =============================================================================
// Unit Tests
// =============================================================================
