// src/services/parser.rs

//! Notice parser service.
//!
//! Turns the full text of a holiday schedule notice into a
//! [`HolidayCalendar`] for its policy year.

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{
    CalendarBuilder, Clause, ClausePolicy, DateMention, DayClassification, DaySpan,
    ParsedNotice, ParserConfig,
};
use crate::services::clause::parse_clause;
use crate::services::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::utils::dates::expand;

/// Title line carrying the policy year, e.g. "国务院办公厅关于2023年部分节假日安排的通知".
const TITLE_PATTERN: &str = r"([0-9]{4}).*节假日安排的通知";

/// Schedule lines end their span with "共N天".
const CLAUSE_PATTERN: &str = r"共[0-9]{1,2}天";

/// Sentinel year used when the notice title cannot be found.
pub const UNRESOLVED_YEAR: i32 = 0;

/// Service for parsing holiday schedule notices.
pub struct NoticeParser {
    options: ParserConfig,
    title: Regex,
    clause: Regex,
}

impl NoticeParser {
    /// Create a parser with the given options.
    pub fn new(options: ParserConfig) -> Result<Self> {
        Ok(Self {
            options,
            title: Regex::new(TITLE_PATTERN)?,
            clause: Regex::new(CLAUSE_PATTERN)?,
        })
    }

    /// Parse a notice, sending diagnostics to the `log` facade.
    pub fn parse(&self, text: &str) -> Result<ParsedNotice> {
        self.parse_with(text, &mut LogSink)
    }

    /// Parse a notice, sending diagnostics to `sink`.
    pub fn parse_with(&self, text: &str, sink: &mut dyn DiagnosticSink) -> Result<ParsedNotice> {
        let year = match self.options.year.or_else(|| self.extract_year(text)) {
            Some(year) => year,
            None => {
                sink.report(Diagnostic::UnresolvedYear);
                UNRESOLVED_YEAR
            }
        };
        log::debug!("Parsing notice for policy year {}", year);

        let mut builder = CalendarBuilder::new();
        for line in text.lines().map(str::trim).filter(|l| self.is_clause(l)) {
            match parse_clause(line).and_then(|clause| apply_clause(&clause, year, &mut builder)) {
                Ok(()) => {}
                Err(AppError::MalformedClause { line, reason })
                    if self.options.clause_policy == ClausePolicy::Skip =>
                {
                    sink.report(Diagnostic::SkippedClause { line, reason });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(ParsedNotice {
            year,
            calendar: builder.build(),
        })
    }

    /// Year from the first "YYYY...节假日安排的通知" line.
    pub fn extract_year(&self, text: &str) -> Option<i32> {
        self.title
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Whether a line belongs to the holiday schedule.
    pub fn is_clause(&self, line: &str) -> bool {
        self.clause.is_match(line)
    }
}

/// Record a clause's holidays, then its make-up workdays.
fn apply_clause(clause: &Clause, year: i32, builder: &mut CalendarBuilder) -> Result<()> {
    let holidays = holiday_dates(clause, year)?;
    let make_up = make_up_dates(clause, year)?;
    log::debug!(
        "{}: {} holiday(s), {} make-up workday(s)",
        clause.name,
        holidays.len(),
        make_up.len()
    );

    builder.extend(holidays, &DayClassification::holiday(&clause.name));
    builder.extend(make_up, &DayClassification::make_up(&clause.name));
    Ok(())
}

fn holiday_dates(clause: &Clause, year: i32) -> Result<Vec<NaiveDate>> {
    match &clause.span {
        DaySpan::Single(day) => Ok(vec![resolve(&clause.line, day, year)?]),
        DaySpan::Range { start, end } => {
            let (first, last) = resolve_range(&clause.line, start, end, year)?;
            Ok(expand(first, last))
        }
    }
}

fn make_up_dates(clause: &Clause, year: i32) -> Result<Vec<NaiveDate>> {
    clause
        .make_up
        .iter()
        .map(|day| resolve(&clause.line, day, year))
        .collect()
}

fn resolve(line: &str, mention: &DateMention, year: i32) -> Result<NaiveDate> {
    mention.resolve(year).ok_or_else(|| {
        AppError::malformed(
            line,
            format!(
                "invalid date {}-{}-{}",
                mention.year.unwrap_or(year),
                mention.month.unwrap_or(0),
                mention.day
            ),
        )
    })
}

/// Resolve the months and years a range leaves implicit.
///
/// A bare end day smaller than the start day falls in the next month, with
/// December rolling over to January. When the range crosses into a new year
/// and no years are written, the start belongs to the year before the policy
/// year.
fn resolve_range(
    line: &str,
    start: &DateMention,
    end: &DateMention,
    year: i32,
) -> Result<(NaiveDate, NaiveDate)> {
    let start_month = start
        .month
        .ok_or_else(|| AppError::malformed(line, "range start has no month"))?;
    let end_month = match end.month {
        Some(month) => month,
        None if start.day > end.day => start_month % 12 + 1,
        None => start_month,
    };

    let back = if start_month > end_month { -1 } else { 0 };
    let shift = |y: i32, delta: i32| {
        y.checked_add(delta)
            .ok_or_else(|| AppError::malformed(line, format!("year {y} out of range")))
    };
    let (start_year, end_year) = match (start.year, end.year) {
        (Some(s), Some(e)) => (s, e),
        (Some(s), None) => (s, shift(s, -back)?),
        (None, Some(e)) => (shift(e, back)?, e),
        (None, None) => (shift(year, back)?, year),
    };

    let start_date = resolve(
        line,
        &DateMention {
            year: Some(start_year),
            month: Some(start_month),
            day: start.day,
        },
        year,
    )?;
    let end_date = resolve(
        line,
        &DateMention {
            year: Some(end_year),
            month: Some(end_month),
            day: end.day,
        },
        year,
    )?;

    if start_date > end_date {
        return Err(AppError::malformed(
            line,
            format!("range ends ({end_date}) before it starts ({start_date})"),
        ));
    }
    Ok((start_date, end_date))
}
