//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DKIM_CONCURRENCY, DNS_ATTEMPTS, DNS_TIMEOUT_SECS,
    LOOKUP_TIMEOUT_MARGIN_MS, MAX_DKIM_CONCURRENCY, MAX_DNS_ATTEMPTS, MAX_DNS_TIMEOUT_SECS,
    REQUEST_TIMEOUT_SECS,
};
use crate::deliverability::worst_case_check_duration;
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Server configuration.
///
/// Parsed from the command line by `clap`; can also be constructed
/// programmatically, e.g. in tests.
///
/// # Examples
///
/// ```bash
/// # Defaults: 0.0.0.0:8001, 3s DNS timeout
/// deliverability_api
///
/// # Local only, slower DNS, JSON logs
/// deliverability_api --bind-address 127.0.0.1 --dns-timeout-secs 5 --log-format json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "deliverability_api",
    about = "Email deliverability checker and marketing revenue calculator API."
)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-attempt DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Attempts per DNS query
    #[arg(long, default_value_t = DNS_ATTEMPTS)]
    pub dns_attempts: usize,

    /// Maximum concurrent DKIM selector lookups per check
    #[arg(long, default_value_t = DKIM_CONCURRENCY)]
    pub dkim_concurrency: usize,

    /// Whole-request timeout in seconds; must exceed the worst-case check duration
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            dns_attempts: DNS_ATTEMPTS,
            dkim_concurrency: DKIM_CONCURRENCY,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Checks that numeric options are within usable ranges.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dns_timeout_secs == 0 || self.dns_timeout_secs > MAX_DNS_TIMEOUT_SECS {
            return Err(ConfigValidationError::new(
                "dns_timeout_secs",
                format!("must be between 1 and {MAX_DNS_TIMEOUT_SECS} seconds"),
            ));
        }
        if self.dns_attempts == 0 {
            return Err(ConfigValidationError::new(
                "dns_attempts",
                "must be greater than 0",
            ));
        }
        if self.dns_attempts > MAX_DNS_ATTEMPTS {
            return Err(ConfigValidationError::new(
                "dns_attempts",
                format!("must be at most {MAX_DNS_ATTEMPTS}"),
            ));
        }
        if self.dkim_concurrency == 0 || self.dkim_concurrency > MAX_DKIM_CONCURRENCY {
            return Err(ConfigValidationError::new(
                "dkim_concurrency",
                format!("must be between 1 and {MAX_DKIM_CONCURRENCY}"),
            ));
        }
        let worst_case = worst_case_check_duration(self.lookup_budget(), self.dkim_concurrency);
        if self.request_timeout() <= worst_case {
            return Err(ConfigValidationError::new(
                "request_timeout_secs",
                format!(
                    "must be greater than {}s, the longest a check takes when every DNS lookup \
                     times out (or raise dkim_concurrency)",
                    worst_case.as_secs_f64().ceil()
                ),
            ));
        }
        Ok(())
    }

    /// Per-attempt DNS timeout, as given to the resolver.
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }

    /// Outer bound on one lookup: every resolver attempt plus a small margin.
    pub fn lookup_budget(&self) -> Duration {
        let attempts = u32::try_from(self.dns_attempts).unwrap_or(u32::MAX);
        self.dns_timeout()
            .saturating_mul(attempts)
            .saturating_add(Duration::from_millis(LOOKUP_TIMEOUT_MARGIN_MS))
    }

    /// Whole-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `host:port` string for binding the listener.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
