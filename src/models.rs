//! Records derived from one scrape of the land-boundaries page.

/// Per-country summary: one per country block on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    /// Country name as shown in the block's link.
    pub country_name: String,
    /// Total land boundary in km; 0 when the page gives none.
    pub border_total_km: f64,
    /// Text after the `note:` label, empty when absent.
    pub note: String,
}

/// One border segment between a country and a neighbor.
///
/// A neighbor listed with several segments (`984 km and 236 km`) produces one
/// pair per segment.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderPair {
    /// Country whose block lists the segment.
    pub country_name: String,
    /// Neighbor named in the segment.
    pub neighbor_country: String,
    /// Segment length in km.
    pub border_length_km: f64,
}

/// Everything extracted from one page, in page order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderDataset {
    /// One record per country block.
    pub countries: Vec<CountryRecord>,
    /// Border segments of all countries, grouped by country.
    pub borders: Vec<BorderPair>,
}
