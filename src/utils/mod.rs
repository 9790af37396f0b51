//! Utility functions shared by the checks.
//!
//! This module provides:
//! - String sanitization and truncation for text embedded in reports

pub mod sanitize;

pub use sanitize::{excerpt, sanitize_and_truncate_error_message, truncate_chars};
