//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    CONNECT_TIMEOUT_MS, DB_PATH, DB_PATH_ENV, DEFAULT_USER_AGENT, READ_TIMEOUT_MS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
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
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per record
    Plain,
    /// Pretty-printed JSON document
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use page_analyzer::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("./analyzer.db"),
///     connect_timeout_ms: 1000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Database path (SQLite file)
    pub db_path: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// TCP connect timeout for page checks, in milliseconds
    pub connect_timeout_ms: u64,

    /// Response timeout for page checks, in milliseconds
    pub read_timeout_ms: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Config {
    /// Connect timeout as a `Duration`.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Read timeout as a `Duration`.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Upper bound on a whole check request: connect plus read.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms.saturating_add(self.read_timeout_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            connect_timeout_ms: CONNECT_TIMEOUT_MS,
            read_timeout_ms: READ_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Command-line interface for the `page-analyzer` binary.
///
/// ```bash
/// # Register a page
/// page-analyzer add https://example.com
///
/// # Run a check and show its history
/// page-analyzer check 1
/// page-analyzer show 1
///
/// # Use a different database
/// PAGE_ANALYZER_DB_PATH=/tmp/pa.db page-analyzer list --output json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "page-analyzer",
    version,
    about = "Registers web pages and records SEO checks in a SQLite database."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Database path (SQLite file)
    #[arg(long, global = true, env = DB_PATH_ENV, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// TCP connect timeout for checks, in milliseconds
    #[arg(long, global = true, default_value_t = CONNECT_TIMEOUT_MS)]
    pub connect_timeout_ms: u64,

    /// Response timeout for checks, in milliseconds
    #[arg(long, global = true, default_value_t = READ_TIMEOUT_MS)]
    pub read_timeout_ms: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Output format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
}

/// Operations exposed by the CLI.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a URL (normalized to scheme://host[:port])
    Add {
        /// URL to register
        url: String,
    },
    /// List registered URLs with their most recent check
    List,
    /// Show a URL and its full check history
    Show {
        /// URL id
        id: i64,
    },
    /// Fetch the page now and record a check
    Check {
        /// URL id
        id: i64,
    },
}

impl From<&GlobalArgs> for Config {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            db_path: args.db_path.clone(),
            log_level: args.log_level.clone(),
            log_format: args.log_format.clone(),
            connect_timeout_ms: args.connect_timeout_ms,
            read_timeout_ms: args.read_timeout_ms,
            user_agent: args.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.db_path, PathBuf::from("./page_analyzer.db"));
        assert_eq!(config.connect_timeout_ms, 2000);
        assert_eq!(config.read_timeout_ms, 2000);
        assert!(config.user_agent.starts_with("page_analyzer/"));
    }

    #[test]
    fn test_request_timeout_is_connect_plus_read() {
        let config = Config {
            connect_timeout_ms: 1500,
            read_timeout_ms: 2500,
            ..Default::default()
        };
        assert_eq!(config.connect_timeout(), Duration::from_millis(1500));
        assert_eq!(config.read_timeout(), Duration::from_millis(2500));
        assert_eq!(config.request_timeout(), Duration::from_secs(4));
    }

    #[test]
    fn test_config_from_global_args() {
        let cli = Cli::try_parse_from([
            "page-analyzer",
            "--db-path",
            "/tmp/x.db",
            "--connect-timeout-ms",
            "100",
            "list",
        ])
        .expect("Should parse");
        let config = Config::from(&cli.global);
        assert_eq!(config.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(config.connect_timeout_ms, 100);
        assert_eq!(config.read_timeout_ms, READ_TIMEOUT_MS);
    }
}
