//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Notice parsing behavior
    #[serde(default)]
    pub parser: ParserConfig,

    /// Where and how the calendar is written
    #[serde(default)]
    pub output: OutputConfig,

    /// Log verbosity
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if let Some(year) = self.parser.year {
            if !(1..=9999).contains(&year) {
                return Err(AppError::validation(format!(
                    "parser.year must be within 1..=9999, got {year}"
                )));
            }
        }
        let prefix = self.output.file_prefix.trim();
        if prefix.is_empty() {
            return Err(AppError::validation("output.file_prefix is empty"));
        }
        if prefix.contains(['/', '\\']) {
            return Err(AppError::validation(
                "output.file_prefix must not contain path separators",
            ));
        }
        Ok(())
    }
}

/// What to do with a schedule line that cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClausePolicy {
    /// Abort the whole parse
    #[default]
    Strict,

    /// Report the line and continue without it
    Skip,
}

/// Notice parsing settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Declared policy year; overrides the year found in the notice title
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub clause_policy: ClausePolicy,
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving `{file_prefix}_{year}.json`
    #[serde(default = "defaults::output_dir")]
    pub dir: PathBuf,

    #[serde(default = "defaults::file_prefix")]
    pub file_prefix: String,

    /// Also write `{file_prefix}_{year}.ics`
    #[serde(default)]
    pub ics: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            file_prefix: defaults::file_prefix(),
            ics: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn output_dir() -> PathBuf {
        PathBuf::from(".")
    }

    pub fn file_prefix() -> String {
        "holiday".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_prefix() {
        let mut config = Config::default();
        config.output.file_prefix = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_prefix_with_separator() {
        let mut config = Config::default();
        config.output.file_prefix = "out/holiday".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_year() {
        let mut config = Config::default();
        config.parser.year = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [parser]
            year = 2024
            clause_policy = "skip"
            "#,
        )
        .unwrap();
        assert_eq!(config.parser.year, Some(2024));
        assert_eq!(config.parser.clause_policy, ClausePolicy::Skip);
        assert_eq!(config.output.file_prefix, "holiday");
        assert!(!config.output.ics);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_output_ics_flag() {
        let config: Config = toml::from_str(
            r#"
            [output]
            ics = true
            "#,
        )
        .unwrap();
        assert!(config.output.ics);
        assert_eq!(config.output.dir, PathBuf::from("."));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Config::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(Config::default().output.dir, PathBuf::from("."));
    }
}
