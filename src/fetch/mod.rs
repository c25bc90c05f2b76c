//! Page checks.
//!
//! `page` performs the single HTTP GET; `engine` turns its outcome into a
//! persisted check record.

mod engine;
mod page;

pub use engine::CheckEngine;
