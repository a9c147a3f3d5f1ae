//! Neighbor-list normalization.
//!
//! Turns the free-text neighbor list of one country, e.g.
//! `Afghanistan 1,357 km; China 477 km (including Akrotiri 11 km); Kyrgyzstan 984 km and 236 km`,
//! into discrete `(neighbor, length)` pairs. Each step is a pure text
//! transform applied in order:
//!
//! 1. strip thousands separators inside numbers followed by `km`
//! 2. drop parenthesized asides that carry their own `<number> km`
//! 3. turn `<number> km and ...` joins into `;` separators
//! 4. split on `;` and `,`, keeping only entries that mention `km`

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::utils::compile_regex_unsafe;

const THOUSANDS_PATTERN: &str = r"\d{1,3}(?:,\d{3})+(?:\.\d+)?\s*km";
const NESTED_ASIDE_PATTERN: &str = r"\s*\([^()]*\d+(?:\.\d+)?\s*km[^()]*\)";
const AND_JOIN_PATTERN: &str = r"(\d+(?:\.\d+)?\s*km)\s+and\s+";
const ENTRY_PATTERN: &str = r"^(.*?)\s*(\d+(?:\.\d+)?)\s*km";

static THOUSANDS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(THOUSANDS_PATTERN, "THOUSANDS_RE"));
static NESTED_ASIDE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(NESTED_ASIDE_PATTERN, "NESTED_ASIDE_RE"));
static AND_JOIN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(AND_JOIN_PATTERN, "AND_JOIN_RE"));
static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ENTRY_PATTERN, "ENTRY_RE"));

const UNIT: &str = "km";

/// Removes `,` thousands separators from every length (`1,357 km` -> `1357 km`).
fn strip_thousands_separators(text: &str) -> String {
    THOUSANDS_RE
        .replace_all(text, |caps: &Captures| caps[0].replace(',', ""))
        .into_owned()
}

/// Removes `( ... <number> km ... )` asides together with the space before them.
fn remove_nested_asides(text: &str) -> String {
    NESTED_ASIDE_RE.replace_all(text, "").into_owned()
}

/// `Kyrgyzstan 984 km and 236 km` -> `Kyrgyzstan 984 km;236 km`.
fn split_and_joins(text: &str) -> String {
    AND_JOIN_RE.replace_all(text, "${1};").into_owned()
}

/// Normalizes a neighbor list into entries like `Afghanistan 1357 km`.
///
/// Entries keep page order. The second segment of an `and` join comes out
/// without a name (`236 km`); [`parse_neighbor_pairs`] attaches the name.
///
/// # Examples
///
/// ```
/// use land_boundaries::normalize::normalize_neighbor_list;
///
/// let entries = normalize_neighbor_list("Afghanistan 1,357 km; China 477 km");
/// assert_eq!(entries, vec!["Afghanistan 1357 km", "China 477 km"]);
/// ```
pub fn normalize_neighbor_list(text: &str) -> Vec<String> {
    let text = strip_thousands_separators(text);
    let text = remove_nested_asides(&text);
    let text = split_and_joins(&text);

    text.replace(',', ";")
        .split(';')
        .map(str::trim)
        .filter(|entry| entry.contains(UNIT))
        .map(str::to_string)
        .collect()
}

/// Splits one normalized entry into `(neighbor, length)`.
///
/// The neighbor is everything before the trailing `<number> km` token, the
/// length is that number without the unit. Returns `None` when the entry has
/// no numeric length.
pub fn split_entry(entry: &str) -> Option<(String, String)> {
    let caps = ENTRY_RE.captures(entry.trim())?;
    Some((caps[1].trim().to_string(), caps[2].to_string()))
}

/// Normalizes and splits a neighbor list into `(neighbor, length)` pairs.
///
/// A segment without its own name inherits the previous neighbor, so
/// `Kyrgyzstan 984 km and 236 km` yields two `Kyrgyzstan` pairs.
pub fn parse_neighbor_pairs(text: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();

    for entry in normalize_neighbor_list(text) {
        let Some((name, length)) = split_entry(&entry) else {
            log::debug!("Skipping neighbor entry without a length: '{}'", entry);
            continue;
        };

        let name = if name.is_empty() {
            match pairs.last() {
                Some((previous, _)) => previous.clone(),
                None => {
                    log::warn!("Neighbor entry '{}' has no name to inherit", entry);
                    name
                }
            }
        } else {
            name
        };
        pairs.push((name, length));
    }

    pairs
}
