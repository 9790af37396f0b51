//! Error types and their HTTP mapping.
//!
//! This module provides:
//! - Startup errors (logger, resolver, listener)
//! - Configuration validation errors
//! - Client input validation errors (422)
//! - Per-lookup DNS errors, absorbed by the deliverability checks
//! - Revenue calculation errors
//! - `ApiError`, the handler error type, and its `IntoResponse` mapping

mod response;
mod types;

// Re-export public API
pub use response::ErrorDetail;
pub use types::{
    ApiError, ConfigValidationError, DnsError, InitializationError, RevenueError,
    ValidationError,
};
