//! Row shapes of the two output files.
//!
//! Field names here are the CSV column names.

use serde::{Serialize, Serializer};

use crate::models::{BorderPair, CountryRecord};

/// Writes kilometers in shortest decimal form: `4130`, `150.4`, `0`.
fn serialize_km<S: Serializer>(km: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(km)
}

/// One row of `countries_info.csv`.
#[derive(Debug, Serialize)]
pub struct CountryRow<'a> {
    /// Country name.
    pub country_cca3: &'a str,
    /// Total land boundary in km.
    #[serde(serialize_with = "serialize_km")]
    pub border_total: f64,
    /// Note text, possibly empty.
    pub notes: &'a str,
}

impl<'a> From<&'a CountryRecord> for CountryRow<'a> {
    fn from(record: &'a CountryRecord) -> Self {
        Self {
            country_cca3: &record.country_name,
            border_total: record.border_total_km,
            notes: &record.note,
        }
    }
}

/// One row of `borders_info.csv`.
#[derive(Debug, Serialize)]
pub struct BorderRow<'a> {
    /// Country name.
    pub country_cca3: &'a str,
    /// Neighbor name.
    pub border_country: &'a str,
    /// Segment length in km.
    #[serde(serialize_with = "serialize_km")]
    pub border_length: f64,
}

impl<'a> From<&'a BorderPair> for BorderRow<'a> {
    fn from(pair: &'a BorderPair) -> Self {
        Self {
            country_cca3: &pair.country_name,
            border_country: &pair.neighbor_country,
            border_length: pair.border_length_km,
        }
    }
}
