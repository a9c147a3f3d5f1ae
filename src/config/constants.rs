//! Configuration constants.
//!
//! The source URL and output filenames are fixed; everything here is used as
//! a default by [`Config`](super::Config).

/// The Factbook field page listing land boundaries for every country.
pub const LAND_BOUNDARIES_URL: &str = "https://www.cia.gov/the-world-factbook/field/land-boundaries/";

/// Output file with one row per country.
pub const COUNTRIES_INFO_FILE: &str = "countries_info.csv";
/// Output file with one row per (country, neighbor) border segment.
pub const BORDERS_INFO_FILE: &str = "borders_info.csv";

/// Field separator for both output files.
pub const CSV_DELIMITER: u8 = b'|';

/// Header row of `countries_info.csv`.
pub const COUNTRIES_INFO_HEADERS: [&str; 3] = ["country_cca3", "border_total", "notes"];
/// Header row of `borders_info.csv`.
pub const BORDERS_INFO_HEADERS: [&str; 3] = ["country_cca3", "border_country", "border_length"];

/// Default User-Agent string for the page request.
///
/// The Factbook CDN rejects some non-browser agents, so a generic Chrome-like
/// string is sent.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Page layout
/// Number of leading blocks in the content region that are not countries.
pub const HEADER_BLOCK_COUNT: usize = 1;

// Label text (matched as substrings of `<strong>` text)
/// Introduces the country's total boundary length.
pub const TOTAL_LABEL: &str = "total:";
/// Introduces the free-text note.
pub const NOTE_LABEL: &str = "note:";
/// Any of these labels introduces a neighbor list.
pub const NEIGHBOR_LABELS: &[&str] = &[
    "border countries",
    "border sovereign base areas",
    "regional borders",
];
