// src/utils/dates.rs

//! Inclusive calendar date ranges.

use chrono::{Days, NaiveDate};

/// An inclusive span of calendar days.
///
/// A range whose start falls after its end is empty rather than swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }
}

/// Ascending iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .checked_add_days(Days::new(1))
            .filter(|d| *d <= self.end);
        Some(current)
    }
}

/// Expand an inclusive date span into every calendar day it covers.
///
/// Returns an empty vector when `start > end`.
pub fn expand(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    DateRange::new(start, end).iter().collect()
}
