//! Page check persistence.
//!
//! Every read returns checks newest first (`created_at DESC`, ties broken by
//! `id DESC`). The listing and the "last check" aggregation both rely on it.

use log::{debug, error};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::storage::models::{NewPageCheck, PageCheck};

const SELECT_CHECKS: &str = "SELECT id, url_id, status_code, title, h1, description, created_at
     FROM url_checks
     WHERE url_id = ?
     ORDER BY created_at DESC, id DESC";

/// Store for page check records.
#[derive(Debug, Clone)]
pub struct CheckStore {
    pool: SqlitePool,
}

impl CheckStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persists a check and returns it with its assigned id.
    ///
    /// Fails with a storage error if `url_id` does not reference a registered URL.
    pub async fn save(&self, check: &NewPageCheck) -> Result<PageCheck, DatabaseError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO url_checks (url_id, status_code, title, h1, description, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(check.url_id)
        .bind(i64::from(check.status_code))
        .bind(check.title.as_deref())
        .bind(check.h1.as_deref())
        .bind(check.description.as_deref())
        .bind(check.created_at.timestamp_millis())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to save check for URL id {}: {e}", check.url_id);
            DatabaseError::SqlError(e)
        })?;

        debug!(
            "Saved check {id} for URL id {} (status {})",
            check.url_id, check.status_code
        );
        Ok(PageCheck {
            id,
            url_id: check.url_id,
            status_code: check.status_code,
            title: check.title.clone(),
            h1: check.h1.clone(),
            description: check.description.clone(),
            created_at: check.created_at,
        })
    }

    /// All checks for a URL, most recent first.
    pub async fn list_by_url(&self, url_id: i64) -> Result<Vec<PageCheck>, DatabaseError> {
        let rows = sqlx::query(SELECT_CHECKS)
            .bind(url_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to list checks for URL id {url_id}: {e}");
                DatabaseError::SqlError(e)
            })?;

        rows.iter()
            .map(PageCheck::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DatabaseError::SqlError)
    }

    /// The head of [`CheckStore::list_by_url`], or `None` if never checked.
    pub async fn most_recent_by_url(&self, url_id: i64) -> Result<Option<PageCheck>, DatabaseError> {
        let row = sqlx::query(&format!("{SELECT_CHECKS} LIMIT 1"))
            .bind(url_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to load last check for URL id {url_id}: {e}");
                DatabaseError::SqlError(e)
            })?;

        row.as_ref()
            .map(PageCheck::try_from)
            .transpose()
            .map_err(DatabaseError::SqlError)
    }
}
