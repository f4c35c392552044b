//! Holiday calendar data structures.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Suffix appended to a holiday name to label its make-up workdays.
pub const MAKE_UP_SUFFIX: &str = "补班";

/// Lookup notes for days the calendar does not name.
pub const WEEKEND_NOTE: &str = "周末";
pub const REGULAR_WORKDAY_NOTE: &str = "普通工作日";
pub const MAKE_UP_WORKDAY_NOTE: &str = "补班工作日";

/// Classification of a single calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DayKind {
    #[serde(rename = "假日")]
    Holiday,

    #[serde(rename = "补班日")]
    MakeUpWorkday,
}

impl DayKind {
    /// Write precedence when two entries target the same date.
    ///
    /// Make-up workdays always override holidays.
    pub fn precedence(self) -> u8 {
        match self {
            DayKind::Holiday => 0,
            DayKind::MakeUpWorkday => 1,
        }
    }
}

/// A day's kind together with the holiday it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayClassification {
    #[serde(rename = "type")]
    pub kind: DayKind,

    /// Holiday display name (make-up days carry the `补班` suffix)
    pub note: String,
}

impl DayClassification {
    pub fn holiday(name: &str) -> Self {
        Self {
            kind: DayKind::Holiday,
            note: name.to_string(),
        }
    }

    pub fn make_up(name: &str) -> Self {
        Self {
            kind: DayKind::MakeUpWorkday,
            note: format!("{name}{MAKE_UP_SUFFIX}"),
        }
    }
}

/// Finished date to classification mapping for one notice.
///
/// Serializes as a JSON object keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HolidayCalendar {
    days: BTreeMap<NaiveDate, DayClassification>,
}

impl HolidayCalendar {
    pub fn get(&self, date: NaiveDate) -> Option<&DayClassification> {
        self.days.get(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entries in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DayClassification)> {
        self.days.iter()
    }

    pub fn count(&self, kind: DayKind) -> usize {
        self.days.values().filter(|c| c.kind == kind).count()
    }

    /// Pretty JSON with two-space indentation and literal non-ASCII text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Whether a looked-up day is off or worked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayType {
    #[serde(rename = "假日")]
    DayOff,

    #[serde(rename = "工作日")]
    Workday,
}

/// Answer to "is this date a holiday?".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    pub date: NaiveDate,
    pub is_holiday: bool,
    #[serde(rename = "type")]
    pub day_type: DayType,
    pub note: String,
}

impl DayStatus {
    fn new(date: NaiveDate, day_type: DayType, note: &str) -> Self {
        Self {
            date,
            is_holiday: day_type == DayType::DayOff,
            day_type,
            note: note.to_string(),
        }
    }
}

impl HolidayCalendar {
    /// Classify any date: listed dates follow the notice, all others fall
    /// back to the Saturday/Sunday weekend.
    pub fn lookup(&self, date: NaiveDate) -> DayStatus {
        match self.get(date) {
            Some(c) if c.kind == DayKind::Holiday => DayStatus::new(date, DayType::DayOff, &c.note),
            Some(_) => DayStatus::new(date, DayType::Workday, MAKE_UP_WORKDAY_NOTE),
            None if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) => {
                DayStatus::new(date, DayType::DayOff, WEEKEND_NOTE)
            }
            None => DayStatus::new(date, DayType::Workday, REGULAR_WORKDAY_NOTE),
        }
    }

    /// Fold another calendar in; its entries replace existing ones.
    pub fn merge(&mut self, other: HolidayCalendar) {
        self.days.extend(other.days);
    }
}

#[derive(Debug, Clone)]
struct CalendarWrite {
    date: NaiveDate,
    classification: DayClassification,
    precedence: u8,
}

/// Ordered log of calendar writes, folded into a [`HolidayCalendar`].
///
/// Higher precedence wins. At equal precedence the later write wins.
#[derive(Debug, Default)]
pub struct CalendarBuilder {
    writes: Vec<CalendarWrite>,
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, date: NaiveDate, classification: DayClassification) {
        let precedence = classification.kind.precedence();
        self.writes.push(CalendarWrite {
            date,
            classification,
            precedence,
        });
    }

    pub fn extend(
        &mut self,
        dates: impl IntoIterator<Item = NaiveDate>,
        classification: &DayClassification,
    ) {
        for date in dates {
            self.push(date, classification.clone());
        }
    }

    pub fn build(self) -> HolidayCalendar {
        let mut writes = self.writes;
        // Stable sort keeps write order within one precedence level.
        writes.sort_by_key(|w| w.precedence);

        let days = writes
            .into_iter()
            .map(|w| (w.date, w.classification))
            .collect();
        HolidayCalendar { days }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_make_up_note_suffix() {
        let c = DayClassification::make_up("春节");
        assert_eq!(c.note, "春节补班");
        assert_eq!(c.kind, DayKind::MakeUpWorkday);
    }

    #[test]
    fn test_make_up_overrides_later_holiday() {
        let mut builder = CalendarBuilder::new();
        builder.push(date(2023, 10, 7), DayClassification::make_up("国庆节"));
        builder.push(date(2023, 10, 7), DayClassification::holiday("国庆节"));
        let calendar = builder.build();

        assert_eq!(calendar.len(), 1);
        assert_eq!(
            calendar.get(date(2023, 10, 7)).map(|c| c.kind),
            Some(DayKind::MakeUpWorkday)
        );
    }

    #[test]
    fn test_later_write_wins_at_same_precedence() {
        let mut builder = CalendarBuilder::new();
        builder.push(date(2023, 1, 1), DayClassification::holiday("元旦"));
        builder.push(date(2023, 1, 1), DayClassification::holiday("新年"));
        let calendar = builder.build();

        assert_eq!(calendar.get(date(2023, 1, 1)).unwrap().note, "新年");
    }

    #[test]
    fn test_json_shape() {
        let mut builder = CalendarBuilder::new();
        builder.push(date(2023, 4, 5), DayClassification::holiday("清明节"));
        builder.push(date(2023, 4, 23), DayClassification::make_up("劳动节"));
        let json = builder.build().to_json().unwrap();

        let expected = r#"{
  "2023-04-05": {
    "type": "假日",
    "note": "清明节"
  },
  "2023-04-23": {
    "type": "补班日",
    "note": "劳动节补班"
  }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_lookup() {
        let mut builder = CalendarBuilder::new();
        builder.push(date(2023, 10, 1), DayClassification::holiday("国庆节"));
        builder.push(date(2023, 10, 7), DayClassification::make_up("国庆节"));
        let calendar = builder.build();

        let listed = calendar.lookup(date(2023, 10, 1));
        assert!(listed.is_holiday);
        assert_eq!((listed.day_type, listed.note.as_str()), (DayType::DayOff, "国庆节"));

        // 2023-10-07 is a Saturday worked in lieu.
        let make_up = calendar.lookup(date(2023, 10, 7));
        assert!(!make_up.is_holiday);
        assert_eq!(make_up.note, MAKE_UP_WORKDAY_NOTE);

        let weekend = calendar.lookup(date(2023, 10, 14));
        assert_eq!((weekend.day_type, weekend.note.as_str()), (DayType::DayOff, WEEKEND_NOTE));

        let weekday = calendar.lookup(date(2023, 10, 11));
        assert_eq!(
            (weekday.day_type, weekday.note.as_str()),
            (DayType::Workday, REGULAR_WORKDAY_NOTE)
        );
    }

    #[test]
    fn test_lookup_json_shape() {
        let status = HolidayCalendar::default().lookup(date(2023, 10, 11));
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2023-10-11","isHoliday":false,"type":"工作日","note":"普通工作日"}"#
        );
    }

    #[test]
    fn test_merge_keeps_both_years() {
        let mut first = CalendarBuilder::new();
        first.push(date(2022, 12, 31), DayClassification::holiday("元旦"));
        let mut second = CalendarBuilder::new();
        second.push(date(2022, 1, 31), DayClassification::holiday("春节"));

        let mut calendar = first.build();
        calendar.merge(second.build());
        assert_eq!(calendar.len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let mut builder = CalendarBuilder::new();
        builder.extend(
            [date(2022, 12, 31), date(2023, 1, 1), date(2023, 1, 2)],
            &DayClassification::holiday("元旦"),
        );
        builder.push(date(2023, 1, 28), DayClassification::make_up("春节"));
        let calendar = builder.build();

        let restored = HolidayCalendar::from_json(&calendar.to_json().unwrap()).unwrap();
        assert_eq!(restored, calendar);
        assert_eq!(restored.count(DayKind::Holiday), 3);
        assert_eq!(restored.count(DayKind::MakeUpWorkday), 1);
    }
}
