//! The check engine: fetch, parse, persist.

use std::sync::Arc;

use log::{info, warn};

use crate::error_handling::{categorize_reqwest_error, DatabaseError};
use crate::fetch::page::fetch_page;
use crate::parse::extract_page_metadata;
use crate::storage::models::now_millis;
use crate::storage::{CheckStore, NewPageCheck, PageCheck, RegisteredUrl};

/// Runs page checks and records their results.
///
/// Every call to [`CheckEngine::run`] writes exactly one `url_checks` row.
/// Failing to reach the page is not an error: it is recorded as a check with
/// status 0 and no metadata.
#[derive(Debug, Clone)]
pub struct CheckEngine {
    client: Arc<reqwest::Client>,
    checks: CheckStore,
}

impl CheckEngine {
    pub fn new(client: Arc<reqwest::Client>, checks: CheckStore) -> Self {
        Self { client, checks }
    }

    /// Checks `url` now and persists the result.
    ///
    /// # Errors
    ///
    /// Only a failure to save the record is returned. Network, TLS, timeout
    /// and body errors are absorbed into a status-0 record.
    pub async fn run(&self, url: &RegisteredUrl) -> Result<PageCheck, DatabaseError> {
        let new_check = self.inspect(url).await;
        let check = self.checks.save(&new_check).await?;
        info!(
            "Checked {} (id {}): status {}",
            url.name, url.id, check.status_code
        );
        Ok(check)
    }

    /// Fetches and parses the page without persisting anything.
    async fn inspect(&self, url: &RegisteredUrl) -> NewPageCheck {
        match fetch_page(&self.client, &url.name).await {
            Ok(page) => {
                let metadata = page
                    .body
                    .as_deref()
                    .map(extract_page_metadata)
                    .unwrap_or_default();
                NewPageCheck {
                    url_id: url.id,
                    status_code: page.status,
                    title: metadata.title,
                    h1: metadata.h1,
                    description: metadata.description,
                    created_at: now_millis(),
                }
            }
            Err(e) => {
                let failure = categorize_reqwest_error(&e);
                warn!("Check of {} failed ({failure}): {e}", url.name);
                NewPageCheck::fetch_failed(url.id, now_millis())
            }
        }
    }
}
