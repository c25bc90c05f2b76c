//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract the SEO fields recorded by a
//! page check:
//! - Page title
//! - First `<h1>` heading
//! - Meta description
//!
//! Parsing is best-effort: html5ever recovers from malformed markup, so a
//! broken document still yields whatever elements could be recognised.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::utils::parse_selector_with_fallback;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const H1_SELECTOR_STR: &str = "h1";
const NAMED_META_SELECTOR_STR: &str = "meta[name]";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TITLE_SELECTOR_STR, "title extraction"));

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(H1_SELECTOR_STR, "h1 extraction"));

static NAMED_META_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(NAMED_META_SELECTOR_STR, "meta description extraction")
});

/// SEO fields extracted from one HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
}

/// Parses an HTML body and extracts title, first h1 and meta description.
///
/// The parsed `Html` is dropped before returning, so callers in async code
/// can hold the result across `.await` points.
pub fn extract_page_metadata(body: &str) -> PageMetadata {
    let document = Html::parse_document(body);
    PageMetadata {
        title: extract_title(&document),
        h1: extract_first_h1(&document),
        description: extract_meta_description(&document),
    }
}

/// Text content of an element with runs of whitespace collapsed to one space.
fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts the page title from an HTML document.
///
/// Returns `None` when there is no `<title>` or its text is empty.
pub fn extract_title(document: &Html) -> Option<String> {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(normalized_text)
        .filter(|title| !title.is_empty());

    if title.is_none() {
        log::debug!("No title found in document");
    }
    title
}

/// Extracts the text of the first `<h1>` element.
///
/// Returns `None` only when the document has no `<h1>`; an empty heading is
/// recorded as an empty string.
pub fn extract_first_h1(document: &Html) -> Option<String> {
    document.select(&H1_SELECTOR).next().map(normalized_text)
}

/// Extracts the meta description from an HTML document.
///
/// Takes the first `<meta>` whose `name` is `description` (case-insensitive)
/// and returns its `content`, trimmed. A missing `content` attribute reads as
/// an empty string; `None` means there is no such element.
pub fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(&NAMED_META_SELECTOR)
        .find(|element| {
            element
                .value()
                .attr("name")
                .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
        })
        .map(|element| {
            element
                .value()
                .attr("content")
                .map_or_else(String::new, |content| content.trim().to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_fields() {
        let html = r#"<html><head>
            <title>Home</title>
            <meta name="description" content="Test site">
            </head><body><h1>Welcome</h1><h1>Second</h1></body></html>"#;
        let metadata = extract_page_metadata(html);
        assert_eq!(
            metadata,
            PageMetadata {
                title: Some("Home".into()),
                h1: Some("Welcome".into()),
                description: Some("Test site".into()),
            }
        );
    }

    #[test]
    fn test_missing_elements_are_absent() {
        let metadata = extract_page_metadata("<html><body><p>nothing here</p></body></html>");
        assert_eq!(metadata, PageMetadata::default());
    }

    #[test]
    fn test_empty_body_yields_nothing() {
        assert_eq!(extract_page_metadata(""), PageMetadata::default());
    }

    #[test]
    fn test_empty_title_is_absent() {
        let doc = Html::parse_document("<html><head><title>   </title></head></html>");
        assert_eq!(extract_title(&doc), None);
    }

    #[test]
    fn test_title_whitespace_is_collapsed() {
        let doc = Html::parse_document("<title>\n  My   Page\n</title>");
        assert_eq!(extract_title(&doc), Some("My Page".into()));
    }

    #[test]
    fn test_h1_nested_markup_is_flattened() {
        let doc = Html::parse_document("<h1>Hello <em>big</em>\n world</h1>");
        assert_eq!(extract_first_h1(&doc), Some("Hello big world".into()));
    }

    #[test]
    fn test_empty_h1_is_present_but_empty() {
        let doc = Html::parse_document("<body><h1></h1></body>");
        assert_eq!(extract_first_h1(&doc), Some(String::new()));
    }

    #[test]
    fn test_meta_description_name_is_case_insensitive() {
        let doc = Html::parse_document(
            r#"<head><meta name="Description" content="  Upper case  "></head>"#,
        );
        assert_eq!(extract_meta_description(&doc), Some("Upper case".into()));
    }

    #[test]
    fn test_meta_description_without_content_is_empty() {
        let doc = Html::parse_document(r#"<head><meta name="description"></head>"#);
        assert_eq!(extract_meta_description(&doc), Some(String::new()));
    }

    #[test]
    fn test_meta_description_absent_without_element() {
        let doc = Html::parse_document(r#"<head><meta name="keywords" content="a"></head>"#);
        assert_eq!(extract_meta_description(&doc), None);
    }

    #[test]
    fn test_other_meta_tags_are_ignored() {
        let doc = Html::parse_document(
            r#"<head><meta name="keywords" content="a,b"><meta name="description" content="real"></head>"#,
        );
        assert_eq!(extract_meta_description(&doc), Some("real".into()));
    }

    #[test]
    fn test_malformed_html_still_extracts() {
        let html = "<html><head><title>Broken</title><body><h1>Still <b>here</h1><div></span><p>open";
        let metadata = extract_page_metadata(html);
        assert_eq!(metadata.title, Some("Broken".into()));
        assert_eq!(metadata.h1, Some("Still here".into()));
    }
}
