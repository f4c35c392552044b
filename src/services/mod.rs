// src/services/mod.rs

//! Notice parsing services.
//!
//! - `clause`: grammar for a single schedule line
//! - `parser`: whole-notice parsing into a calendar
//! - `diagnostics`: recoverable conditions reported during parsing

pub mod clause;
pub mod diagnostics;
pub mod parser;

pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use parser::{NoticeParser, UNRESOLVED_YEAR};
