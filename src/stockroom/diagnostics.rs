//! Advisory messages produced while touching the persistence file.
//!
//! These are not results: a malformed line is dropped and the load carries on, a
//! missing file just means an empty catalog. The store hands each event to the
//! [`DiagnosticSink`] it was built with and also records it through `tracing`.

use crate::codec::MalformedLine;
use crate::commands::CmdMessage;
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    FileCreated(PathBuf),
    FileMissing(PathBuf),
    MalformedLine {
        line_number: usize,
        line: String,
        reason: MalformedLine,
    },
    ReadFailed(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FileCreated(path) => write!(f, "{} created successfully.", path.display()),
            Diagnostic::FileMissing(path) => write!(f, "File not found: {}", path.display()),
            Diagnostic::MalformedLine {
                line_number,
                line,
                reason,
            } => write!(
                f,
                "Skipping malformed line {} ({}): {}",
                line_number, reason, line
            ),
            Diagnostic::ReadFailed(msg) => write!(f, "Error reading from file: {}", msg),
        }
    }
}

impl From<&Diagnostic> for CmdMessage {
    fn from(diagnostic: &Diagnostic) -> Self {
        let text = diagnostic.to_string();
        match diagnostic {
            Diagnostic::FileCreated(_) | Diagnostic::FileMissing(_) => CmdMessage::info(text),
            Diagnostic::MalformedLine { .. } => CmdMessage::warning(text),
            Diagnostic::ReadFailed(_) => CmdMessage::error(text),
        }
    }
}

pub trait DiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Prints every diagnostic on its own line, colored by severity. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        println!("{}", CmdMessage::from(diagnostic).styled());
    }
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Collects diagnostics in memory. Clones share the same buffer, so a test can
/// hand one clone to a store and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.events.borrow_mut().push(diagnostic.clone());
    }
}
