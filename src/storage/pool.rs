//! Database connection pool management.
//!
//! This module initializes and configures the SQLite connection pool with:
//! - WAL mode enabled for concurrent access
//! - Foreign keys enforced (a check cannot outlive its URL)
//! - Automatic database file creation

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use log::{error, info};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Initializes and returns a database connection pool for `db_path`.
///
/// Creates the database file if it doesn't exist and enables WAL mode
/// for better concurrent access.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    let db_path_str = db_path.to_string_lossy().to_string();
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(&db_path_str)
    {
        Ok(_) => info!("Database file created: {db_path_str}"),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("Using existing database file: {db_path_str}")
        }
        Err(e) => {
            error!("Failed to create database file: {e}");
            return Err(DatabaseError::FileCreationError(e.to_string()));
        }
    }

    let pool = SqlitePool::connect(&format!("sqlite:{}", db_path_str))
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await
        .map_err(|e| {
            error!("Failed to set WAL mode: {e}");
            DatabaseError::SqlError(e)
        })?;

    Ok(pool)
}
