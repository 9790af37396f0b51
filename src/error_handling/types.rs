//! Error type definitions.
//!
//! This module defines all error types used throughout the service.

use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),

    /// Error binding the HTTP listener.
    #[error("Failed to bind HTTP server to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// A configuration value outside its accepted range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What the accepted values are
    pub message: String,
}

impl ConfigValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Client input that failed validation. Surfaced as 422.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Domain is required")]
    EmptyDomain,

    #[error("Invalid domain format")]
    InvalidDomain,

    #[error("Domain name too long ({0} > 253 characters)")]
    DomainTooLong(usize),

    #[error("{field} must be a finite, non-negative number")]
    InvalidAmount { field: &'static str },

    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

/// Failure of a single DNS lookup.
///
/// Never surfaced to clients as a request failure; checks turn it into a
/// failed check result carrying the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("The DNS query name does not exist: {0}")]
    NxDomain(String),

    #[error("The DNS response does not contain an answer to the question: {0}")]
    NoRecords(String),

    #[error("The DNS operation timed out: {0}")]
    Timeout(String),

    #[error("{0}")]
    Other(String),
}

/// Revenue calculation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevenueError {
    #[error("Invalid industry selected")]
    InvalidIndustry { industry: String },
}

/// Errors returned by HTTP handlers.
///
/// Each variant maps to a status code in `IntoResponse`; the body is always
/// `{"detail": "<message>"}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error calculating revenue: {0}")]
    Revenue(#[from] RevenueError),

    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("{0}")]
    Internal(String),
}
