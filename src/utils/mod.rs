//! Utility functions and helpers.

pub mod dates;

pub use dates::{DateRange, expand};
