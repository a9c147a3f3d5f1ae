//! Error type definitions.
//!
//! One enum per pipeline concern. Missing fields inside a single country
//! block are not errors; they fall back to defaults in the extractors.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for fetching the source page.
///
/// Every variant halts the pipeline before any output is written.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (DNS, connect, TLS, timeout).
    #[error("HTTP request to {url} failed")]
    Request {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: ReqwestError,
    },

    /// The server answered with anything other than 200 OK.
    #[error("Failed to fetch data from {url}: status code {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code received.
        status: u16,
    },

    /// The response body could not be read or decoded.
    #[error("Failed to read response body from {url}")]
    Body {
        /// Requested URL.
        url: String,
        /// Underlying read or decode error.
        #[source]
        source: ReqwestError,
    },
}

impl FetchError {
    /// HTTP status code, if the failure was a non-200 response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error types for page-level parsing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The document has no `<main>` element inside `<body>`.
    #[error("Page has no main content region; the page layout may have changed")]
    MissingContent,
}

/// Error types for writing the CSV outputs.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be created (or truncated).
    #[error("Failed to create output file {}", .path.display())]
    FileCreation {
        /// Output path that could not be opened.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// A record could not be serialized or written.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
