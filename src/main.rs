//! Main application entry point (binary).
//!
//! This is a thin wrapper around the `land_boundaries` library that handles:
//! - Logger initialization
//! - User-facing output formatting
//!
//! There are no command-line options; the source URL and output filenames
//! are fixed.

use anyhow::{Context, Result};
use std::process;

use land_boundaries::initialization::init_logger_with;
use land_boundaries::{run_scrape, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::default();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_scrape(config).await {
        Ok(report) => {
            println!(
                "Wrote {} countr{} to {} and {} border segment{} to {} in {:.1}s",
                report.countries,
                if report.countries == 1 { "y" } else { "ies" },
                report.countries_path.display(),
                report.borders,
                if report.borders == 1 { "" } else { "s" },
                report.borders_path.display(),
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("land_boundaries error: {:#}", e);
            process::exit(1);
        }
    }
}
