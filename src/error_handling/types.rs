//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories the outer layers use to turn them into user-facing outcomes.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error opening the database or applying migrations.
    #[error("Database initialization error: {0}")]
    DatabaseError(#[from] DatabaseError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

impl DatabaseError {
    /// Returns `true` when the underlying statement was rejected by a
    /// `UNIQUE` constraint.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DatabaseError::SqlError(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

/// Reasons a raw input cannot be turned into a canonical URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidUrlError {
    /// Input was empty or whitespace only.
    #[error("URL is empty")]
    Blank,

    /// Input exceeded `MAX_URL_LENGTH`.
    #[error("URL exceeds maximum length ({length} > {max})")]
    TooLong { length: usize, max: usize },

    /// Input is not an absolute URL.
    #[error("Malformed URL '{input}': {source}")]
    Malformed {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Scheme other than http/https.
    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// Parsed, but without a host to connect to.
    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Errors returned by the registry facade.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The input could not be normalized.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] InvalidUrlError),

    /// The canonical name is already registered.
    #[error("URL already registered: {0}")]
    DuplicateUrl(String),

    /// The id does not resolve to a registered URL.
    #[error("URL not found: id {0}")]
    NotFound(i64),

    /// The persistence layer failed.
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

/// How a caller should present a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad user input; never a server-side failure.
    Validation,
    /// Not really an error (e.g. "already exists").
    Informational,
    /// The requested record does not exist.
    NotFound,
    /// Generic failure of the system itself.
    Failure,
}

impl RegistryError {
    /// Categorizes the error for the outer layer.
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::InvalidUrl(_) => ErrorCategory::Validation,
            RegistryError::DuplicateUrl(_) => ErrorCategory::Informational,
            RegistryError::NotFound(_) => ErrorCategory::NotFound,
            RegistryError::Storage(_) => ErrorCategory::Failure,
        }
    }
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Informational => "info",
            ErrorCategory::NotFound => "not found",
            ErrorCategory::Failure => "failure",
        }
    }

    /// Process exit code used by the CLI for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Informational => 0,
            ErrorCategory::Failure => 1,
            ErrorCategory::Validation => 2,
            ErrorCategory::NotFound => 3,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of failure that turn a page check into a soft failure (status 0).
///
/// These are never returned as errors; they only label the log line written
/// when a check could not obtain a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchFailure {
    Timeout,
    Dns,
    Tls,
    Connect,
    Redirect,
    Request,
    Body,
    Decode,
    Other,
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchFailure::Timeout => "HTTP request timeout",
            FetchFailure::Dns => "DNS resolution error",
            FetchFailure::Tls => "TLS handshake error",
            FetchFailure::Connect => "HTTP connect error",
            FetchFailure::Redirect => "HTTP redirect error",
            FetchFailure::Request => "HTTP request error",
            FetchFailure::Body => "HTTP body read error",
            FetchFailure::Decode => "HTTP body decode error",
            FetchFailure::Other => "HTTP other error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_categories() {
        assert_eq!(
            RegistryError::InvalidUrl(InvalidUrlError::Blank).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            RegistryError::DuplicateUrl("https://example.com".into()).category(),
            ErrorCategory::Informational
        );
        assert_eq!(
            RegistryError::NotFound(7).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            RegistryError::Storage(DatabaseError::FileCreationError("x".into())).category(),
            ErrorCategory::Failure
        );
    }

    #[test]
    fn test_exit_codes_are_distinct_for_errors() {
        // Informational outcomes exit cleanly
        assert_eq!(ErrorCategory::Informational.exit_code(), 0);
        let codes = [
            ErrorCategory::Failure.exit_code(),
            ErrorCategory::Validation.exit_code(),
            ErrorCategory::NotFound.exit_code(),
        ];
        assert!(codes.iter().all(|c| *c != 0));
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RegistryError::NotFound(42).to_string(),
            "URL not found: id 42"
        );
        assert_eq!(
            InvalidUrlError::UnsupportedScheme("ftp".into()).to_string(),
            "Unsupported URL scheme 'ftp' (expected http or https)"
        );
        assert_eq!(
            InvalidUrlError::TooLong {
                length: 3000,
                max: 2048
            }
            .to_string(),
            "URL exceeds maximum length (3000 > 2048)"
        );
    }

    #[test]
    fn test_non_sql_errors_are_not_unique_violations() {
        assert!(!DatabaseError::FileCreationError("denied".into()).is_unique_violation());
        assert!(!DatabaseError::SqlError(sqlx::Error::RowNotFound).is_unique_violation());
    }

    #[test]
    fn test_fetch_failure_display() {
        assert_eq!(FetchFailure::Timeout.to_string(), "HTTP request timeout");
        assert_eq!(FetchFailure::Dns.as_str(), "DNS resolution error");
    }
}
