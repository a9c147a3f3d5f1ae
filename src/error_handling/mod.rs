//! Error handling.
//!
//! This module provides the typed errors for each pipeline stage:
//! - **Initialization**: logger and HTTP client setup
//! - **Fetch**: transport failures and non-200 responses
//! - **Parse**: page-level layout problems
//! - **Export**: file creation and CSV serialization
//!
//! Fetch and parse errors stop the run before any file is written.

mod types;

// Re-export public API
pub use types::{ExportError, FetchError, InitializationError, ParseError};
