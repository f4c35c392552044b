//! Pipeline entry points.
//!
//! - `run_export`: Parse a notice and write its calendar
//! - `run_lookup`: Classify one date against written calendars
//! - `run_validate`: Check configuration values

pub mod export;
pub mod lookup;
pub mod validate;

pub use export::{ExportOutcome, run_export};
pub use lookup::run_lookup;
pub use validate::run_validate;
