//! Utility functions shared by the parsing stages.
//!
//! This module provides:
//! - CSS selector and regex compilation for static patterns
//! - Whitespace sanitization for text pulled out of HTML

mod sanitize;
mod selector;

pub use sanitize::collapse_whitespace;
pub use selector::{compile_regex_unsafe, parse_selector_unsafe};
