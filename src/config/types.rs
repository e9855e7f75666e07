//! Configuration types.
//!
//! The binary takes no arguments, so `Config::default()` is the only
//! configuration it ever sees. Library callers (and tests) build their own
//! `Config` to point the exporter at a different database or output file.

use std::path::{Path, PathBuf};

use crate::config::constants::{DEFAULT_DB_PATH, DEFAULT_OUTPUT_FILE};
use crate::export::{ExportOptions, RowOrder};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// # Examples
///
/// ```no_run
/// use labels_dump::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/tmp/client_data.db"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Database path (SQLite file), already expanded
    pub db_path: PathBuf,

    /// Output JSON file
    pub output: PathBuf,

    /// Row ordering for the export
    pub order: RowOrder,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: expand_home(DEFAULT_DB_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            order: RowOrder::default(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Builds the export options described by this configuration.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            db_path: self.db_path.clone(),
            output: self.output.clone(),
            order: self.order,
        }
    }
}

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without a leading `~`, and every path when the home directory cannot
/// be determined, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    expand_home_with(path, dirs::home_dir().as_deref())
}

fn expand_home_with(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}
