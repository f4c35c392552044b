// src/pipeline/lookup.rs

use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::models::{DayStatus, HolidayCalendar};
use crate::storage::CalendarStorage;

/// Classify `date` against the stored calendars.
///
/// A notice for year N may reach back into late December of N-1, so both
/// the date's own year and the following one are consulted.
pub fn run_lookup(storage: &dyn CalendarStorage, date: NaiveDate) -> Result<DayStatus> {
    let mut calendar = HolidayCalendar::default();
    let mut found = false;

    for year in [date.year(), date.year() + 1] {
        if let Some(loaded) = storage.load_calendar(year)? {
            log::debug!("Loaded {} entries for {}", loaded.len(), year);
            calendar.merge(loaded);
            found = true;
        }
    }
    if !found {
        log::warn!("No calendar stored for {}; using weekends only", date.year());
    }

    Ok(calendar.lookup(date))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::{
        CalendarBuilder, DayClassification, DayType, MAKE_UP_WORKDAY_NOTE, WEEKEND_NOTE,
    };
    use crate::storage::LocalStorage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn storage_with_2023(tmp: &TempDir) -> LocalStorage {
        let storage = LocalStorage::new(tmp.path());
        let mut builder = CalendarBuilder::new();
        builder.extend(
            [date(2022, 12, 31), date(2023, 1, 1), date(2023, 1, 2)],
            &DayClassification::holiday("元旦"),
        );
        builder.push(date(2023, 1, 28), DayClassification::make_up("春节"));
        storage.write_calendar(2023, &builder.build()).unwrap();
        storage
    }

    #[test]
    fn test_lookup_listed_days() {
        let tmp = TempDir::new().unwrap();
        let storage = storage_with_2023(&tmp);

        let holiday = run_lookup(&storage, date(2023, 1, 2)).unwrap();
        assert!(holiday.is_holiday);
        assert_eq!(holiday.note, "元旦");

        let make_up = run_lookup(&storage, date(2023, 1, 28)).unwrap();
        assert_eq!(make_up.day_type, DayType::Workday);
        assert_eq!(make_up.note, MAKE_UP_WORKDAY_NOTE);
    }

    #[test]
    fn test_lookup_reads_next_year_file() {
        let tmp = TempDir::new().unwrap();
        let storage = storage_with_2023(&tmp);

        let status = run_lookup(&storage, date(2022, 12, 31)).unwrap();
        assert!(status.is_holiday);
        assert_eq!(status.note, "元旦");
    }

    #[test]
    fn test_lookup_without_calendar_uses_weekends() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        // 2030-06-01 is a Saturday.
        let status = run_lookup(&storage, date(2030, 6, 1)).unwrap();
        assert_eq!((status.day_type, status.note.as_str()), (DayType::DayOff, WEEKEND_NOTE));

        let status = run_lookup(&storage, date(2030, 6, 3)).unwrap();
        assert!(!status.is_holiday);
    }
}
