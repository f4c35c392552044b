//! iCalendar (RFC 5545) rendering of a holiday calendar.

use chrono::{DateTime, Days, Utc};

use crate::models::{DayKind, HolidayCalendar};

const CRLF: &str = "\r\n";
const PRODUCT_ID: &str = "-//holiday-notice//Holiday Calendar//CN";
const CALENDAR_NAME: &str = "中国法定节假日";
const CALENDAR_DESCRIPTION: &str = "中国法定节假日和调休补班信息";
const TIMEZONE: &str = "Asia/Shanghai";
const UID_DOMAIN: &str = "holiday-notice";

impl DayKind {
    fn label(self) -> &'static str {
        match self {
            DayKind::Holiday => "假日",
            DayKind::MakeUpWorkday => "补班日",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            DayKind::Holiday => "🎉",
            DayKind::MakeUpWorkday => "💼",
        }
    }
}

/// Escape a TEXT property value.
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

impl HolidayCalendar {
    /// Render one all-day VEVENT per entry, in calendar order.
    ///
    /// `stamp` becomes every event's DTSTAMP.
    pub fn to_ics(&self, stamp: DateTime<Utc>) -> String {
        let stamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();
        let mut lines = vec![
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:{PRODUCT_ID}"),
            "CALSCALE:GREGORIAN".to_string(),
            format!("X-WR-CALNAME:{CALENDAR_NAME}"),
            format!("X-WR-CALDESC:{CALENDAR_DESCRIPTION}"),
            format!("X-WR-TIMEZONE:{TIMEZONE}"),
        ];

        for (date, day) in self.iter() {
            let start = date.format("%Y%m%d").to_string();
            // DTEND is exclusive for all-day events.
            let end = date
                .checked_add_days(Days::new(1))
                .unwrap_or(*date)
                .format("%Y%m%d")
                .to_string();
            let note = escape_text(&day.note);

            lines.push("BEGIN:VEVENT".to_string());
            lines.push(format!("UID:{start}@{UID_DOMAIN}"));
            lines.push(format!("DTSTART;VALUE=DATE:{start}"));
            lines.push(format!("DTEND;VALUE=DATE:{end}"));
            lines.push(format!("DTSTAMP:{stamp}"));
            lines.push(format!("SUMMARY:{} {note}", day.kind.icon()));
            lines.push(format!(
                "DESCRIPTION:类型: {}\\n说明: {note}",
                day.kind.label()
            ));
            lines.push(format!("CATEGORIES:{}", day.kind.label()));
            lines.push("END:VEVENT".to_string());
        }
        lines.push("END:VCALENDAR".to_string());

        let mut ics = lines.join(CRLF);
        ics.push_str(CRLF);
        ics
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;
    use crate::models::{CalendarBuilder, DayClassification};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_events_sorted_with_categories() {
        let mut builder = CalendarBuilder::new();
        builder.push(date(2023, 10, 7), DayClassification::make_up("国庆节"));
        builder.push(date(2022, 12, 31), DayClassification::holiday("元旦"));
        let ics = builder.build().to_ics(stamp());

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(ics.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);

        let new_year = ics.find("UID:20221231@").unwrap();
        let national_day = ics.find("UID:20231007@").unwrap();
        assert!(new_year < national_day);

        assert!(ics.contains("DTSTART;VALUE=DATE:20221231\r\nDTEND;VALUE=DATE:20230101\r\n"));
        assert!(ics.contains("DTSTAMP:20230102T030405Z\r\n"));
        assert!(ics.contains("SUMMARY:🎉 元旦\r\n"));
        assert!(ics.contains("SUMMARY:💼 国庆节补班\r\n"));
        assert!(ics.contains("DESCRIPTION:类型: 补班日\\n说明: 国庆节补班\r\n"));
        assert!(ics.contains("CATEGORIES:假日\r\n"));
        assert!(ics.contains("CATEGORIES:补班日\r\n"));
    }

    #[test]
    fn test_empty_calendar_has_no_events() {
        let ics = HolidayCalendar::default().to_ics(stamp());
        assert!(!ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("X-WR-CALNAME:中国法定节假日\r\n"));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
    }
}
