//! HTTP client initialization.
//!
//! This module builds the client used by the check engine.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};

/// Initializes the HTTP client used for page checks.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - TCP connect timeout (`connect_timeout_ms`)
/// - Read timeout (`read_timeout_ms`): a response that stalls longer fails
/// - Whole-request timeout of connect + read, bounding a check to ~4s by default
/// - Redirect following (up to `MAX_REDIRECT_HOPS`)
/// - Rustls TLS backend (no native TLS)
///
/// The client never retries; each check issues exactly one GET.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .connect_timeout(config.connect_timeout())
        .read_timeout(config.read_timeout())
        .timeout(config.request_timeout())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
