//! Fetch failure categorization.
//!
//! Maps a `reqwest::Error` onto a [`FetchFailure`] so that soft failures are
//! logged with a meaningful label.

use std::error::Error as StdError;

use super::types::FetchFailure;

/// Categorizes a `reqwest::Error` into a `FetchFailure`.
///
/// Timeouts are checked first since reqwest reports them as connect or request
/// errors as well. DNS and TLS causes are recognised from the error's source
/// chain, which carries the hyper/rustls messages.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        return FetchFailure::Timeout;
    }

    let chain = source_chain_lowercase(error);

    if chain.contains("dns")
        || chain.contains("failed to lookup address")
        || chain.contains("name resolution")
        || chain.contains("failed to resolve")
    {
        return FetchFailure::Dns;
    }

    if chain.contains("tls")
        || chain.contains("ssl")
        || chain.contains("certificate")
        || chain.contains("handshake")
    {
        return FetchFailure::Tls;
    }

    if error.is_connect() {
        FetchFailure::Connect
    } else if error.is_redirect() {
        FetchFailure::Redirect
    } else if error.is_body() {
        FetchFailure::Body
    } else if error.is_decode() {
        FetchFailure::Decode
    } else if error.is_request() || error.is_builder() {
        FetchFailure::Request
    } else {
        FetchFailure::Other
    }
}

/// Concatenates the messages of an error and all of its sources, lower-cased.
fn source_chain_lowercase(error: &(dyn StdError + 'static)) -> String {
    let mut messages = vec![error.to_string()];
    let mut current = error.source();
    while let Some(cause) = current {
        messages.push(cause.to_string());
        current = cause.source();
    }
    messages.join(": ").to_lowercase()
}
