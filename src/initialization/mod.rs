//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - HTTP client (timeouts, redirects, user agent)
//!
//! The database pool lives in `storage::pool`. All initialization functions
//! return proper error types for error handling.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
