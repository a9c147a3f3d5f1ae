//! CSV export of scraped border data.
//!
//! Two independent, pipe-delimited files:
//! - `countries_info.csv`: `country_cca3|border_total|notes`
//! - `borders_info.csv`: `country_cca3|border_country|border_length`
//!
//! Existing files are overwritten.

mod csv;
mod row;

pub use self::csv::{
    write_borders_csv, write_borders_info, write_countries_csv, write_countries_info,
};
pub use row::{BorderRow, CountryRow};
