//! HTML parsing for page checks.

mod html;

pub use html::{extract_page_metadata, PageMetadata};
