//! page_analyzer library: URL registry and page checks
//!
//! Registers web-page URLs under a canonical `scheme://host[:port]` name and
//! records on-demand checks of each page (HTTP status, `<title>`, first
//! `<h1>`, meta description) in a SQLite database.
//!
//! # Example
//!
//! ```no_run
//! use page_analyzer::{Config, Registry};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Registry::connect(&Config::default()).await?;
//!
//! let url = registry.register("HTTPS://Example.com:443/path?q=1").await?;
//! assert_eq!(url.name, "https://example.com:443");
//!
//! let check = registry.run_check(url.id).await?;
//! println!("{} -> {}", url.name, check.status_code);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod parse;
mod storage;
mod utils;

// Re-export public API
pub use app::{normalize_url, Registry, UrlDetail, UrlSummary};
pub use config::{Cli, Command, Config, GlobalArgs, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    DatabaseError, ErrorCategory, FetchFailure, InitializationError, InvalidUrlError,
    RegistryError,
};
pub use fetch::CheckEngine;
pub use parse::{extract_page_metadata, PageMetadata};
pub use storage::{
    init_db_pool_with_path, run_migrations, CheckStore, PageCheck, RegisteredUrl, UrlStore,
};
