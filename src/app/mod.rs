//! Application layer: URL normalization and the registry facade.

pub mod registry;
pub mod url;

pub use registry::{Registry, UrlDetail, UrlSummary};
pub use url::normalize_url;
