//! URL validation and normalization utilities.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::InvalidUrlError;

/// Normalizes raw input into the canonical `scheme://host[:port]` form.
///
/// Path, query, fragment and user-info are dropped; scheme and host are
/// lower-cased (IDN hosts become punycode). A port is kept whenever the input
/// spells one out, including the scheme's default (`https://a.com:443` keeps
/// `:443`); an absent or empty port is omitted.
///
/// Only absolute `http`/`https` URLs with a host are accepted. The function is
/// pure and idempotent on its own output.
///
/// # Errors
///
/// Returns `InvalidUrlError` when the input is blank, longer than
/// `MAX_URL_LENGTH`, not an absolute URL, uses another scheme, or has no host.
pub fn normalize_url(raw: &str) -> Result<String, InvalidUrlError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(InvalidUrlError::Blank);
    }
    if input.len() > MAX_URL_LENGTH {
        return Err(InvalidUrlError::TooLong {
            length: input.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(input).map_err(|source| InvalidUrlError::Malformed {
        input: input.to_string(),
        source,
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(InvalidUrlError::UnsupportedScheme(scheme.to_string()));
    }

    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| InvalidUrlError::MissingHost(input.to_string()))?;

    let canonical = match explicit_port(input, &parsed) {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    };
    Ok(canonical.to_lowercase())
}

/// Returns the port if the input wrote one out.
///
/// `Url` elides a port equal to the scheme default, so the authority of the
/// raw input is inspected to tell `https://a.com:443` from `https://a.com`.
fn explicit_port(input: &str, parsed: &Url) -> Option<u16> {
    if let Some(port) = parsed.port() {
        return Some(port);
    }

    let (_, rest) = input.split_once(':')?;
    let rest = rest.trim_start_matches(['/', '\\']);
    let authority_end = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    let port = if host_port.starts_with('[') {
        host_port.split_once(']')?.1.strip_prefix(':')?
    } else {
        host_port.rsplit_once(':')?.1
    };

    if port.is_empty() {
        None
    } else {
        parsed.port_or_known_default()
    }
}
