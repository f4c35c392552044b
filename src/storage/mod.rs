//! Storage abstractions for calendar persistence.
//!
//! One JSON file per policy year:
//!
//! ```text
//! {root}/
//! ├── holiday_2023.json
//! ├── holiday_2023.ics
//! └── holiday_2024.json
//! ```

pub mod local;

use std::path::PathBuf;

use crate::error::Result;
use crate::models::HolidayCalendar;

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for calendar storage backends.
pub trait CalendarStorage {
    /// Write the calendar for `year`, returning where it was stored.
    fn write_calendar(&self, year: i32, calendar: &HolidayCalendar) -> Result<PathBuf>;

    /// Load a previously written calendar, `None` if absent.
    fn load_calendar(&self, year: i32) -> Result<Option<HolidayCalendar>>;

    /// Write the iCalendar feed for `year`, returning where it was stored.
    fn write_ics(&self, year: i32, ics: &str) -> Result<PathBuf>;
}
