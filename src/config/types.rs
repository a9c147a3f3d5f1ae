//! Configuration types.
//!
//! There is no command-line surface; `Config::default()` is what the binary
//! runs with. Tests and library callers construct it directly.

use std::path::PathBuf;

use crate::config::constants::{
    BORDERS_INFO_FILE, COUNTRIES_INFO_FILE, DEFAULT_USER_AGENT, LAND_BOUNDARIES_URL,
};

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
/// use land_boundaries::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output_dir: PathBuf::from("out"),
///     ..Default::default()
/// };
/// assert!(config.countries_info_path().ends_with("countries_info.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page to scrape
    pub url: String,

    /// Directory the two CSV files are written to
    pub output_dir: PathBuf,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Full path of `countries_info.csv`.
    pub fn countries_info_path(&self) -> PathBuf {
        self.output_dir.join(COUNTRIES_INFO_FILE)
    }

    /// Full path of `borders_info.csv`.
    pub fn borders_info_path(&self) -> PathBuf {
        self.output_dir.join(BORDERS_INFO_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: LAND_BOUNDARIES_URL.to_string(),
            output_dir: PathBuf::from("."),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
