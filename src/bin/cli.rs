//! Holiday notice exporter CLI
//!
//! Reads a holiday schedule notice from stdin and writes `holiday_<year>.json`,
//! or answers whether a single date is a day off.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use holiday_notice::{
    error::Result,
    models::{ClausePolicy, Config},
    pipeline::{run_export, run_lookup, run_validate},
    storage::LocalStorage,
};

/// Convert a holiday schedule notice into a JSON calendar
#[derive(Parser, Debug)]
#[command(name = "holiday-notice", version, about = "Holiday Notice Exporter")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read the notice from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory receiving the calendar file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Declared policy year, overriding the notice title
    #[arg(short, long)]
    year: Option<i32>,

    /// Skip malformed clauses instead of aborting
    #[arg(long)]
    lenient: bool,

    /// Parse and report without writing a file
    #[arg(long)]
    dry_run: bool,

    /// Also write an iCalendar feed next to the JSON file
    #[arg(long)]
    ics: bool,

    /// Classify one date (YYYY-MM-DD) against the written calendars
    #[arg(long, value_name = "DATE")]
    lookup: Option<NaiveDate>,

    /// Only validate the configuration
    #[arg(long)]
    validate: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn read_notice(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }
    if cli.year.is_some() {
        config.parser.year = cli.year;
    }
    if cli.lenient {
        config.parser.clause_policy = ClausePolicy::Skip;
    }
    if cli.ics {
        config.output.ics = true;
    }

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init_logging(level);

    if cli.validate {
        return run_validate(&config);
    }
    config.validate()?;

    let storage = LocalStorage::with_prefix(&config.output.dir, &config.output.file_prefix);

    if let Some(date) = cli.lookup {
        let status = run_lookup(&storage, date)?;
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    let text = read_notice(cli.input.as_ref())?;
    let outcome = run_export(&config, &text, &storage, cli.dry_run)?;

    if let Some(path) = outcome.path {
        log::info!("Calendar saved to {}", path.display());
    }
    if let Some(path) = outcome.ics_path {
        log::info!("iCalendar feed saved to {}", path.display());
    }

    Ok(())
}
