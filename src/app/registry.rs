//! Registry facade.
//!
//! The entry point for outer layers (CLI, web handlers). It composes the
//! normalizer, the two stores and the check engine, and returns structured
//! results or typed [`RegistryError`]s. It never renders anything.

use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::app::url::normalize_url;
use crate::config::Config;
use crate::error_handling::{InitializationError, RegistryError};
use crate::fetch::CheckEngine;
use crate::initialization::init_client;
use crate::storage::{
    init_db_pool_with_path, run_migrations, CheckStore, PageCheck, RegisteredUrl, UrlStore,
};

/// A registered URL with its most recent check, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlSummary {
    pub url: RegisteredUrl,
    pub last_check: Option<PageCheck>,
}

/// A registered URL with its full check history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlDetail {
    pub url: RegisteredUrl,
    pub checks: Vec<PageCheck>,
}

/// URL registry and page-check entry point.
#[derive(Debug, Clone)]
pub struct Registry {
    urls: UrlStore,
    checks: CheckStore,
    engine: CheckEngine,
}

impl Registry {
    /// Composes a registry from an open pool and an HTTP client.
    ///
    /// The pool must already have migrations applied.
    pub fn new(pool: SqlitePool, client: Arc<reqwest::Client>) -> Self {
        let checks = CheckStore::new(pool.clone());
        Self {
            urls: UrlStore::new(pool),
            engine: CheckEngine::new(client, checks.clone()),
            checks,
        }
    }

    /// Opens the database at `config.db_path`, applies migrations and builds
    /// the HTTP client.
    pub async fn connect(config: &Config) -> Result<Self, InitializationError> {
        let pool = init_db_pool_with_path(&config.db_path).await?;
        run_migrations(&pool).await?;
        let client = init_client(config)?;
        Ok(Self::new(pool, client))
    }

    /// Normalizes `raw_input` and registers it.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` if the input cannot be normalized
    /// - `DuplicateUrl` if the canonical name is already registered, including
    ///   when a concurrent registration wins the insert race
    /// - `Storage` for any other database failure
    pub async fn register(&self, raw_input: &str) -> Result<RegisteredUrl, RegistryError> {
        let name = normalize_url(raw_input).inspect_err(|e| {
            warn!("Rejected URL input {raw_input:?}: {e}");
        })?;

        match self.urls.register(&name).await {
            Ok(url) => {
                info!("Registered {} with id {}", url.name, url.id);
                Ok(url)
            }
            Err(e) => {
                let e = duplicate_on_unique_violation(&name, e);
                if let RegistryError::DuplicateUrl(_) = e {
                    info!("URL already registered: {name}");
                }
                Err(e)
            }
        }
    }

    /// Every registered URL (id ascending) with its most recent check.
    ///
    /// The order is the store's; it is not re-sorted by check recency.
    pub async fn list_with_last_check(&self) -> Result<Vec<UrlSummary>, RegistryError> {
        let urls = self.urls.list_all().await?;
        let mut summaries = Vec::with_capacity(urls.len());
        for url in urls {
            let last_check = self.checks.most_recent_by_url(url.id).await?;
            summaries.push(UrlSummary { url, last_check });
        }
        Ok(summaries)
    }

    /// The URL with id `id` and its checks, newest first; `None` if unknown.
    pub async fn get_detail(&self, id: i64) -> Result<Option<UrlDetail>, RegistryError> {
        let Some(url) = self.urls.find_by_id(id).await? else {
            return Ok(None);
        };
        let checks = self.checks.list_by_url(url.id).await?;
        Ok(Some(UrlDetail { url, checks }))
    }

    /// Runs a check against the URL with id `id` and returns the new record.
    ///
    /// An unreachable page still yields a record (status 0).
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is unknown, `Storage` if the record cannot be saved.
    pub async fn run_check(&self, id: i64) -> Result<PageCheck, RegistryError> {
        let url = self
            .urls
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::NotFound(id))?;
        Ok(self.engine.run(&url).await?)
    }
}

/// Maps a unique-constraint rejection of `name` to `DuplicateUrl`.
fn duplicate_on_unique_violation(name: &str, error: RegistryError) -> RegistryError {
    match error {
        RegistryError::Storage(ref db_err) if db_err.is_unique_violation() => {
            RegistryError::DuplicateUrl(name.to_string())
        }
        other => other,
    }
}
