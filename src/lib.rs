//! land_boundaries library: scrape the World Factbook land-boundaries field
//!
//! This library fetches the land-boundaries page, extracts each country's
//! total border length, note and neighbor list, and writes two pipe-delimited
//! CSV files: `countries_info.csv` and `borders_info.csv`.
//!
//! # Example
//!
//! ```no_run
//! use land_boundaries::{Config, run_scrape};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_scrape(Config::default()).await?;
//! println!("{} countries, {} border segments", report.countries, report.borders);
//! # Ok(())
//! # }
//! ```
//!
//! A saved copy of the page can be processed without network access through
//! [`parse::parse_page`] and the writers in [`export`].

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
mod models;
pub mod normalize;
pub mod parse;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExportError, FetchError, InitializationError, ParseError};
pub use fetch::fetch_html;
pub use models::{BorderDataset, BorderPair, CountryRecord};
pub use run::{run_scrape, ScrapeReport};

// Internal run module (contains the pipeline driver)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::time::Instant;

    use crate::config::Config;
    use crate::export::{write_borders_info, write_countries_info};
    use crate::fetch::fetch_html;
    use crate::initialization::init_client;
    use crate::parse::parse_page;

    /// Results of a scrape run.
    #[derive(Debug, Clone)]
    pub struct ScrapeReport {
        /// Rows written to `countries_info.csv`
        pub countries: usize,
        /// Rows written to `borders_info.csv`
        pub borders: usize,
        /// Path of `countries_info.csv`
        pub countries_path: PathBuf,
        /// Path of `borders_info.csv`
        pub borders_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the full pipeline: fetch, parse, write both CSV files.
    ///
    /// Nothing is written unless the page was fetched with status 200 and has
    /// a main content region. Per-country gaps (no total, no note) never fail
    /// the run; those rows carry default values.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be built
    /// - The request fails or the status is not 200
    /// - The page has no main content region
    /// - Either output file cannot be written
    pub async fn run_scrape(config: Config) -> Result<ScrapeReport> {
        let start = Instant::now();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let html = fetch_html(&client, &config.url)
            .await
            .context("Failed to fetch land boundaries page")?;
        let dataset = parse_page(&html).context("Failed to parse land boundaries page")?;

        let countries_path = config.countries_info_path();
        let borders_path = config.borders_info_path();

        let countries = write_countries_info(&countries_path, &dataset.countries)
            .with_context(|| format!("Failed to write {}", countries_path.display()))?;
        let borders = write_borders_info(&borders_path, &dataset.borders)
            .with_context(|| format!("Failed to write {}", borders_path.display()))?;

        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Scrape finished in {:.2}s: {} countries, {} border segments",
            elapsed_seconds, countries, borders
        );

        Ok(ScrapeReport {
            countries,
            borders,
            countries_path,
            borders_path,
            elapsed_seconds,
        })
    }
}
