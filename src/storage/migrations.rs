// storage/migrations.rs
// Database migration management

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Runs SQLx migrations located in the `migrations/` directory.
///
/// Creates the `urls` and `url_checks` tables and the index backing
/// "checks for a URL, newest first".
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let migrations_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let migrator = sqlx::migrate::Migrator::new(migrations_dir.as_path()).await?;
    migrator.run(pool).await?;
    Ok(())
}
