//! Country block extraction.
//!
//! The page's `<main>` region holds one `div.pb30` per country, preceded by
//! a header block that describes the field itself.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::HEADER_BLOCK_COUNT;
use crate::error_handling::ParseError;

// CSS selector strings
const MAIN_SELECTOR_STR: &str = "body main";
const COUNTRY_BLOCK_SELECTOR_STR: &str = "div.pb30";

static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(MAIN_SELECTOR_STR, "MAIN_SELECTOR"));
static COUNTRY_BLOCK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(COUNTRY_BLOCK_SELECTOR_STR, "COUNTRY_BLOCK_SELECTOR")
});

/// Collects the per-country blocks of the page, in document order.
///
/// The first block under `<main>` is the header and is skipped.
///
/// # Errors
///
/// Returns `ParseError::MissingContent` if the document has no `<main>`
/// inside `<body>`. A content region without country blocks is not an error.
pub fn extract_country_blocks(document: &Html) -> Result<Vec<ElementRef<'_>>, ParseError> {
    let main = document
        .select(&MAIN_SELECTOR)
        .next()
        .ok_or(ParseError::MissingContent)?;

    let blocks: Vec<ElementRef<'_>> = main.select(&COUNTRY_BLOCK_SELECTOR).collect();
    log::debug!(
        "Found {} blocks in main content region ({} header)",
        blocks.len(),
        HEADER_BLOCK_COUNT.min(blocks.len())
    );

    Ok(blocks.into_iter().skip(HEADER_BLOCK_COUNT).collect())
}
