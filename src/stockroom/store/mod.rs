//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the command layer knows about
//! persistence. A store owns the whole catalog as a unit: it loads every record at
//! once and writes every record back at once. There is no partial update.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a plain text file (`inventory.txt` by default)
//! - [`memory::InMemoryStore`]: Keeps the encoded lines in a `String`, for testing
//!
//! Both go through the same [`codec`](crate::codec), so the in-memory backend sees
//! exactly what would have hit the disk, malformed lines included.
//!
//! ## Loading is best effort
//!
//! `load_all` never fails. Lines that do not decode are dropped and reported to the
//! store's [`DiagnosticSink`]; a read error stops the load and whatever was decoded
//! up to that point is returned. Because commands save what they loaded, dropped
//! lines disappear from the file on the next write.

use crate::codec::{self, MalformedLine};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::model::Product;
use std::io;
use tracing::{debug, info, warn};

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait DataStore {
    /// Create empty backing storage if there is none yet
    fn ensure_exists(&mut self) -> Result<()>;

    /// Load every well-formed record in stored order
    fn load_all(&self) -> Vec<Product>;

    /// Replace the stored catalog with `products`, in order
    fn save_all(&mut self, products: &[Product]) -> Result<()>;
}

/// Encodes the whole catalog up front so an unencodable record aborts before any
/// byte of the previous contents is touched.
pub(crate) fn encode_all(products: &[Product]) -> Result<String> {
    let mut out = String::new();
    for product in products {
        out.push_str(&codec::encode(product)?);
        out.push('\n');
    }
    Ok(out)
}

pub(crate) fn decode_lines<I>(lines: I, sink: &dyn DiagnosticSink) -> Vec<Product>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut products = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                report(sink, Diagnostic::ReadFailed(e.to_string()));
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match codec::decode(&line) {
            Ok(product) => products.push(product),
            Err(reason) => report(sink, malformed(idx + 1, line, reason)),
        }
    }
    debug!(count = products.len(), "decoded products");
    products
}

fn malformed(line_number: usize, line: String, reason: MalformedLine) -> Diagnostic {
    Diagnostic::MalformedLine {
        line_number,
        line,
        reason,
    }
}

pub(crate) fn report(sink: &dyn DiagnosticSink, diagnostic: Diagnostic) {
    match &diagnostic {
        Diagnostic::FileCreated(path) => info!(path = %path.display(), "created data file"),
        Diagnostic::FileMissing(path) => debug!(path = %path.display(), "data file missing"),
        Diagnostic::MalformedLine {
            line_number,
            reason,
            ..
        } => warn!(line_number, %reason, "dropping malformed line"),
        Diagnostic::ReadFailed(msg) => warn!(error = %msg, "read aborted"),
    }
    sink.emit(&diagnostic);
}
