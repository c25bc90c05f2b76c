//! Single-request page download.

use log::debug;

use crate::config::MAX_RESPONSE_BODY_SIZE;

/// Status and body of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    /// `None` when the body exceeded `MAX_RESPONSE_BODY_SIZE` and was not kept.
    pub body: Option<String>,
}

/// Issues one GET request and reads the body as text.
///
/// Any HTTP status is a successful fetch; only failures to obtain or read the
/// response (DNS, connect, TLS, timeout, malformed response, body read) are
/// returned as errors. No retries are attempted.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<FetchedPage, reqwest::Error> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    debug!("GET {url} -> {status}");

    if let Some(length) = response.content_length() {
        if length > MAX_RESPONSE_BODY_SIZE as u64 {
            debug!("Skipping large body for {url}: {length} bytes declared");
            return Ok(FetchedPage { status, body: None });
        }
    }

    // text() decompresses and decodes using the response charset
    let text = response.text().await?;
    if text.len() > MAX_RESPONSE_BODY_SIZE {
        debug!("Skipping large body for {url}: {} bytes", text.len());
        return Ok(FetchedPage { status, body: None });
    }

    Ok(FetchedPage {
        status,
        body: Some(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_page_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Hi</h1>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let page = fetch_page(&client, &server.uri()).await.unwrap();

        assert_eq!(page.status, 200);
        assert_eq!(page.body.as_deref(), Some("<h1>Hi</h1>"));
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let page = fetch_page(&client, &server.uri()).await.unwrap();
        assert_eq!(page.status, 503);
    }

    #[tokio::test]
    async fn test_oversized_body_is_dropped() {
        let server = MockServer::start().await;
        let big = "a".repeat(MAX_RESPONSE_BODY_SIZE + 1);
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(big))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let page = fetch_page(&client, &server.uri()).await.unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.body, None);
    }
}
