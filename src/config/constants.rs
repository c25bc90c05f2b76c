//! Configuration constants.
//!
//! This module defines the defaults and limits used throughout the application:
//! database location, HTTP timeouts, and size limits for inputs and responses.

/// Default SQLite database path, used when neither `--db-path` nor
/// `PAGE_ANALYZER_DB_PATH` is set.
pub const DB_PATH: &str = "./page_analyzer.db";

/// Environment variable consulted for the database path.
pub const DB_PATH_ENV: &str = "PAGE_ANALYZER_DB_PATH";

// Network operation timeouts
/// TCP connection timeout for a page check, in milliseconds
pub const CONNECT_TIMEOUT_MS: u64 = 2000;
/// Response timeout for a page check once connected, in milliseconds.
/// Together with the connect timeout this bounds a check to roughly 4s.
pub const READ_TIMEOUT_MS: u64 = 2000;

/// Maximum number of redirect hops the check client follows
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent sent with every page check.
pub const DEFAULT_USER_AGENT: &str = concat!("page_analyzer/", env!("CARGO_PKG_VERSION"));

// Input and body size limits
/// Maximum URL length accepted for registration (2048 characters).
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum response body size in bytes (2MB).
/// Larger bodies are recorded with their status code but not parsed.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Status code stored for a check that never obtained an HTTP response.
pub const FETCH_FAILED_STATUS: u16 = 0;
