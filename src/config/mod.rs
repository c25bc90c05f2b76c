//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, etc.)
//! - The library `Config` struct
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Cli, Command, Config, GlobalArgs, LogFormat, LogLevel, OutputFormat};
