// src/pipeline/export.rs

use std::path::PathBuf;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, DayKind, ParsedNotice};
use crate::services::{LogSink, NoticeParser};
use crate::storage::CalendarStorage;

/// Summary of an export run.
#[derive(Debug)]
pub struct ExportOutcome {
    pub notice: ParsedNotice,

    /// Written file, `None` on a dry run
    pub path: Option<PathBuf>,

    /// Written iCalendar feed, when enabled
    pub ics_path: Option<PathBuf>,
}

/// Parse a notice and persist its calendar.
///
/// Nothing is written when parsing fails.
pub fn run_export(
    config: &Config,
    text: &str,
    storage: &dyn CalendarStorage,
    dry_run: bool,
) -> Result<ExportOutcome> {
    let parser = NoticeParser::new(config.parser)?;
    let notice = parser.parse_with(text, &mut LogSink)?;

    if notice.is_degraded() {
        log::warn!("Calendar is keyed under year 0; check the notice title");
    }
    log::info!(
        "Parsed {} holiday(s) and {} make-up workday(s) for {}",
        notice.calendar.count(DayKind::Holiday),
        notice.calendar.count(DayKind::MakeUpWorkday),
        notice.year
    );

    if dry_run {
        log::info!("Dry run, nothing written");
        return Ok(ExportOutcome {
            notice,
            path: None,
            ics_path: None,
        });
    }

    let path = storage.write_calendar(notice.year, &notice.calendar)?;
    let ics_path = if config.output.ics {
        let ics = notice.calendar.to_ics(Utc::now());
        Some(storage.write_ics(notice.year, &ics)?)
    } else {
        None
    };

    Ok(ExportOutcome {
        notice,
        path: Some(path),
        ics_path,
    })
}
