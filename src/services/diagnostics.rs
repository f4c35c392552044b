// src/services/diagnostics.rs

//! Recoverable parse conditions and where they are reported.

use std::fmt;

/// A condition the parser recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No "YYYY年...节假日安排的通知" title was found; dates use year 0
    UnresolvedYear,

    /// A malformed clause was dropped under the lenient clause policy
    SkippedClause { line: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedYear => {
                write!(f, "Could not extract the policy year from the notice, using 0")
            }
            Diagnostic::SkippedClause { line, reason } => {
                write!(f, "Skipped clause '{line}': {reason}")
            }
        }
    }
}

/// Receiver for parser diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade at warning level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
