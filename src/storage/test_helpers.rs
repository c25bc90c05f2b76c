//! Shared test helpers for storage module tests.
//!
//! This module provides common utilities for database setup and test data creation
//! used across storage module tests.

#[cfg(test)]
use chrono::{DateTime, Utc};
#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::storage::run_migrations;

/// Creates a test database pool with migrations applied.
/// Uses an in-memory database for fast test execution.
#[cfg(test)]
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Inserts a registered URL directly and returns its id.
#[cfg(test)]
pub async fn create_test_url(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (name, created_at) VALUES (?, ?) RETURNING id")
        .bind(name)
        .bind(1_704_067_200_000i64)
        .fetch_one(pool)
        .await
        .expect("Failed to insert test URL")
}

/// Millisecond timestamp as `DateTime<Utc>`.
#[cfg(test)]
pub fn timestamp(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).expect("valid test timestamp")
}
