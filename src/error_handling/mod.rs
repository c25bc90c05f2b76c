//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, storage and the registry
//! - Categories the outer layer uses to present registry errors
//! - Categorization of HTTP fetch failures (logged, never raised)
//!
//! Fetch failures are deliberately absent from the error taxonomy: a check
//! that cannot reach its page is recorded with status 0 instead.

mod categorization;
mod types;

pub use categorization::categorize_reqwest_error;
pub use types::{
    DatabaseError, ErrorCategory, FetchFailure, InitializationError, InvalidUrlError,
    RegistryError,
};
