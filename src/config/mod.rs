//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (source URL, output filenames, CSV layout)
//! - Label strings used to locate fields on the page
//! - The library `Config` struct and logging option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
