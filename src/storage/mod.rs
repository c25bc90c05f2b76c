// storage/mod.rs
// Database operations module

pub mod checks;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod urls;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use checks::CheckStore;
pub use migrations::run_migrations;
pub use models::{NewPageCheck, PageCheck, RegisteredUrl};
pub use pool::init_db_pool_with_path;
pub use urls::UrlStore;
