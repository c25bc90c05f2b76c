//! Registered URL persistence.
//!
//! Insert and lookup of rows in the `urls` table.

use log::{debug, error};
use sqlx::SqlitePool;

use crate::error_handling::{DatabaseError, RegistryError};
use crate::storage::models::{now_millis, RegisteredUrl};

/// Store for registered URLs.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct UrlStore {
    pool: SqlitePool,
}

impl UrlStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registers a canonical URL name.
    ///
    /// Looks the name up first and fails with `RegistryError::DuplicateUrl` if
    /// it is already present. The lookup and the insert are two independent
    /// statements: two concurrent registrations of the same name can both pass
    /// the lookup. The `UNIQUE` constraint on `urls.name` then rejects the
    /// second insert, which surfaces as `RegistryError::Storage` with
    /// [`DatabaseError::is_unique_violation`] set.
    pub async fn register(&self, name: &str) -> Result<RegisteredUrl, RegistryError> {
        if self.find_by_name(name).await?.is_some() {
            return Err(RegistryError::DuplicateUrl(name.to_string()));
        }
        Ok(self.insert(name).await?)
    }

    /// Inserts a row without the prior existence check.
    pub(crate) async fn insert(&self, name: &str) -> Result<RegisteredUrl, DatabaseError> {
        let created_at = now_millis();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO urls (name, created_at) VALUES (?, ?)
             RETURNING id",
        )
        .bind(name)
        .bind(created_at.timestamp_millis())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to insert URL {name}: {e}");
            DatabaseError::SqlError(e)
        })?;

        debug!("Inserted URL {name} with id {id}");
        Ok(RegisteredUrl {
            id,
            name: name.to_string(),
            created_at,
        })
    }

    /// Exact-match lookup by canonical name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<RegisteredUrl>, DatabaseError> {
        let row = sqlx::query("SELECT id, name, created_at FROM urls WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to look up URL by name {name}: {e}");
                DatabaseError::SqlError(e)
            })?;

        row.as_ref()
            .map(RegisteredUrl::try_from)
            .transpose()
            .map_err(DatabaseError::SqlError)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<RegisteredUrl>, DatabaseError> {
        let row = sqlx::query("SELECT id, name, created_at FROM urls WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to look up URL by id {id}: {e}");
                DatabaseError::SqlError(e)
            })?;

        row.as_ref()
            .map(RegisteredUrl::try_from)
            .transpose()
            .map_err(DatabaseError::SqlError)
    }

    /// All registered URLs in insertion (id ascending) order.
    pub async fn list_all(&self) -> Result<Vec<RegisteredUrl>, DatabaseError> {
        let rows = sqlx::query("SELECT id, name, created_at FROM urls ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to list URLs: {e}");
                DatabaseError::SqlError(e)
            })?;

        rows.iter()
            .map(RegisteredUrl::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DatabaseError::SqlError)
    }
}
