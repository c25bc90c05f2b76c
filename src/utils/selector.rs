//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that never matches anything.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`), so extraction degrades to "element absent" instead of panicking.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "title extraction")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        #[allow(clippy::expect_used)]
        Selector::parse(MATCH_NOTHING).expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
}
