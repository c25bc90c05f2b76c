// Shared test helpers for registry setup.
//
// Each test gets its own SQLite file in a temporary directory so tests can run
// in parallel.

use std::path::PathBuf;

use page_analyzer::{Config, LogFormat, LogLevel, Registry};
use tempfile::TempDir;

/// Builds a Config for tests pointing at `db_path`.
#[allow(dead_code)] // Not every test file overrides timeouts
pub fn create_test_config(db_path: PathBuf) -> Config {
    Config {
        db_path,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        user_agent: "page_analyzer_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Opens a registry backed by a fresh database file.
///
/// The returned `TempDir` must be kept alive for the duration of the test.
pub async fn create_test_registry() -> (Registry, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = create_test_config(dir.path().join("page_analyzer.db"));
    let registry = Registry::connect(&config)
        .await
        .expect("Failed to open registry");
    (registry, dir)
}

/// Returns a loopback URL nothing is listening on.
#[allow(dead_code)]
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
