// storage/models.rs
// Database models and types

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::config::FETCH_FAILED_STATUS;

/// A URL accepted into the registry.
///
/// # Database Schema
///
/// Maps to the `urls` table. `created_at` is stored as milliseconds since the
/// Unix epoch; `name` carries a `UNIQUE` constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUrl {
    pub id: i64,
    /// Canonical `scheme://host[:port]` form
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One recorded check of a registered URL.
///
/// Maps to the `url_checks` table. A `status_code` of
/// [`FETCH_FAILED_STATUS`] means no HTTP response was obtained; metadata
/// fields are then always `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageCheck {
    pub id: i64,
    pub url_id: i64,
    pub status_code: u16,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PageCheck {
    /// True when the check could not obtain an HTTP response.
    pub fn is_fetch_failure(&self) -> bool {
        self.status_code == FETCH_FAILED_STATUS
    }
}

/// A check built by the engine, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPageCheck {
    pub url_id: i64,
    pub status_code: u16,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewPageCheck {
    /// Soft-failure record: status 0, no metadata.
    pub fn fetch_failed(url_id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            url_id,
            status_code: FETCH_FAILED_STATUS,
            title: None,
            h1: None,
            description: None,
            created_at,
        }
    }
}

/// Current time truncated to the millisecond precision the database stores.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

fn timestamp_from_row(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    let millis: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: format!("timestamp out of range: {millis}").into(),
    })
}

impl TryFrom<&SqliteRow> for RegisteredUrl {
    type Error = sqlx::Error;

    fn try_from(row: &SqliteRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            created_at: timestamp_from_row(row, "created_at")?,
        })
    }
}

impl TryFrom<&SqliteRow> for PageCheck {
    type Error = sqlx::Error;

    fn try_from(row: &SqliteRow) -> Result<Self, Self::Error> {
        let status: i64 = row.try_get("status_code")?;
        let status_code = u16::try_from(status).map_err(|e| sqlx::Error::ColumnDecode {
            index: "status_code".to_string(),
            source: Box::new(e),
        })?;
        Ok(Self {
            id: row.try_get("id")?,
            url_id: row.try_get("url_id")?,
            status_code,
            title: row.try_get("title")?,
            h1: row.try_get("h1")?,
            description: row.try_get("description")?,
            created_at: timestamp_from_row(row, "created_at")?,
        })
    }
}
