//! Utilities for sanitizing text pulled out of HTML.
//!
//! Text nodes carry the page's indentation and line breaks; these are noise
//! in a single-line CSV field.

/// Collapses every run of whitespace to a single space and trims both ends.
///
/// # Arguments
///
/// * `text` - Raw text node content
///
/// # Returns
///
/// The text on one line, words separated by single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
