//! deliverability_api library: email deliverability checks and revenue projections
//!
//! This library provides an HTTP API that:
//! - Scores a domain's email deliverability from its DNS records (MX, SPF,
//!   DKIM, DMARC and address resolution)
//! - Projects the monthly and annual revenue a business could add through
//!   email and SMS marketing, from per-industry benchmarks
//!
//! # Example
//!
//! ```no_run
//! use deliverability_api::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 9000,
//!     dkim_concurrency: 16,
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The checks can also be used without the server:
//!
//! ```no_run
//! use std::sync::Arc;
//! use deliverability_api::initialization::init_resolver;
//! use deliverability_api::{DeliverabilityChecker, DomainName, HickoryLookup};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver(std::time::Duration::from_secs(3), 2)?;
//! let checker = DeliverabilityChecker::new(Arc::new(HickoryLookup::new(resolver)));
//! let report = checker.check(&DomainName::parse("https://example.com/")?).await;
//! println!("{}: {}", report.domain, report.overall_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod deliverability;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod revenue;
pub mod server;
mod utils;

use std::sync::Arc;

use anyhow::Context;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use deliverability::{CheckResult, DeliverabilityChecker, DeliverabilityReport};
pub use dns::{DnsLookup, HickoryLookup, StaticResolver};
pub use domain::DomainName;
pub use error_handling::{ApiError, ValidationError};
pub use revenue::{calculate_revenue, RevenueReport, RevenueRequest};
pub use server::{build_router, start_server, AppState};

/// Validates `config`, sets up the resolver and serves the API until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the resolver cannot be
/// created, the listen address cannot be bound, or the server fails.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    config.validate().context("Invalid configuration")?;

    let resolver = initialization::init_resolver(config.dns_timeout(), config.dns_attempts)
        .context("Failed to initialize DNS resolver")?;
    let checker = DeliverabilityChecker::new(Arc::new(HickoryLookup::new(resolver)))
        .with_lookup_timeout(config.lookup_budget())
        .with_dkim_concurrency(config.dkim_concurrency);

    log::info!(
        "DNS lookups: {}s timeout, {} attempt(s), {:?} per lookup, {} concurrent DKIM probes",
        config.dns_timeout_secs,
        config.dns_attempts,
        config.lookup_budget(),
        config.dkim_concurrency
    );

    let router = build_router(AppState::new(checker), config.request_timeout());
    start_server(&config.listen_address(), router).await
}
