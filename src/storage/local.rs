//! Local filesystem storage implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::HolidayCalendar;
use crate::storage::CalendarStorage;

const DEFAULT_PREFIX: &str = "holiday";

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    file_prefix: String,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(root_dir, DEFAULT_PREFIX)
    }

    /// Create a LocalStorage writing `{prefix}_{year}.json` files.
    pub fn with_prefix(root_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    /// File name for a given year.
    pub fn file_name(&self, year: i32) -> String {
        format!("{}_{}.json", self.file_prefix, year)
    }

    /// Get the full path for a year's calendar.
    pub fn path(&self, year: i32) -> PathBuf {
        self.root_dir.join(self.file_name(year))
    }

    /// Get the full path for a year's iCalendar feed.
    pub fn ics_path(&self, year: i32) -> PathBuf {
        self.path(year).with_extension("ics")
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root_dir)?;

        let tmp = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Read bytes, returning None if file doesn't exist.
    fn read_bytes(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

impl CalendarStorage for LocalStorage {
    fn write_calendar(&self, year: i32, calendar: &HolidayCalendar) -> Result<PathBuf> {
        let path = self.path(year);
        let json = calendar.to_json()?;
        self.write_bytes(&path, json.as_bytes())?;

        log::info!("Wrote {} entries to {}", calendar.len(), path.display());
        Ok(path)
    }

    fn load_calendar(&self, year: i32) -> Result<Option<HolidayCalendar>> {
        match self.read_bytes(&self.path(year))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn write_ics(&self, year: i32, ics: &str) -> Result<PathBuf> {
        let path = self.ics_path(year);
        self.write_bytes(&path, ics.as_bytes())?;

        log::info!("Wrote iCalendar feed to {}", path.display());
        Ok(path)
    }
}
