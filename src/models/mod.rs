// src/models/mod.rs

//! Domain models for the holiday notice exporter.

mod calendar;
mod clause;
mod config;
mod ics;

// Re-export all public types
pub use calendar::{
    CalendarBuilder, DayClassification, DayKind, DayStatus, DayType, HolidayCalendar,
    MAKE_UP_SUFFIX, MAKE_UP_WORKDAY_NOTE, REGULAR_WORKDAY_NOTE, WEEKEND_NOTE,
};
pub use clause::{Clause, DateMention, DaySpan};
pub use config::{ClausePolicy, Config, LoggingConfig, OutputConfig, ParserConfig};

/// A parsed notice: the policy year and its calendar.
///
/// `year == 0` marks a notice whose year could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNotice {
    pub year: i32,
    pub calendar: HolidayCalendar,
}

impl ParsedNotice {
    pub fn is_degraded(&self) -> bool {
        self.year == 0
    }
}
