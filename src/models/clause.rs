//! Schedule clause structures produced by the clause grammar.

use chrono::NaiveDate;

/// A date as written in the notice: any of year and month may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMention {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: u32,
}

impl DateMention {
    pub fn month_day(month: u32, day: u32) -> Self {
        Self {
            year: None,
            month: Some(month),
            day,
        }
    }

    /// Resolve against the policy year, preferring an explicitly written year.
    ///
    /// Returns `None` when no month was written or the date does not exist.
    pub fn resolve(&self, policy_year: i32) -> Option<NaiveDate> {
        let month = self.month?;
        NaiveDate::from_ymd_opt(self.year.unwrap_or(policy_year), month, self.day)
    }
}

/// The holiday span of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySpan {
    /// "4月5日放假"
    Single(DateMention),

    /// "4月29日至5月3日放假": the end may omit its month and year
    Range { start: DateMention, end: DateMention },
}

/// One itemized holiday line of a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Original line text, kept for diagnostics
    pub line: String,

    /// Holiday display name
    pub name: String,

    pub span: DaySpan,

    /// Compensatory workdays, empty when the clause names none
    pub make_up: Vec<DateMention>,
}
