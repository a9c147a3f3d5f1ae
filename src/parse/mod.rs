//! Page parsing.
//!
//! This module turns the land-boundaries HTML into a [`BorderDataset`]:
//! - Country block discovery inside the main content region
//! - Per-block field extraction (name, total, note, neighbor list)
//! - Neighbor-list normalization into border pairs

mod blocks;
mod fields;

pub use blocks::extract_country_blocks;
pub use fields::{
    extract_country_block, extract_country_name, find_label, parse_length_km, text_after_label,
    CountryBlock,
};

use scraper::Html;

use crate::error_handling::ParseError;
use crate::models::BorderDataset;

/// Parses a full land-boundaries page.
///
/// Produces one country row per block (header block excluded) and every
/// border pair found in the blocks' neighbor lists. Blocks with missing
/// labels still produce a country row with default values.
///
/// # Errors
///
/// Returns `ParseError::MissingContent` if the page has no main content region.
pub fn parse_page(html: &str) -> Result<BorderDataset, ParseError> {
    let document = Html::parse_document(html);
    let blocks = extract_country_blocks(&document)?;

    let mut dataset = BorderDataset::default();
    for block in blocks {
        let fields = extract_country_block(block);
        dataset.borders.extend(fields.border_pairs());
        dataset.countries.push(fields.country_record());
    }

    log::info!(
        "Parsed {} countries and {} border segments",
        dataset.countries.len(),
        dataset.borders.len()
    );
    Ok(dataset)
}
