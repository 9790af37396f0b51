//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;

use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used by the deliverability checks.
///
/// Uses the default upstream configuration (Google Public DNS) with short
/// timeouts so a slow or unresponsive name server fails one check instead of
/// stalling a whole request.
///
/// # Arguments
///
/// * `timeout` - Timeout for a single query attempt
/// * `attempts` - Attempts per query before the lookup fails
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `attempts` is zero.
pub fn init_resolver(
    timeout: Duration,
    attempts: usize,
) -> Result<Arc<TokioResolver>, InitializationError> {
    if attempts == 0 {
        return Err(InitializationError::DnsResolverError(
            "at least one query attempt is required".to_string(),
        ));
    }

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = attempts;
    // Names are always fully qualified; never append search domains
    opts.ndots = 0;

    let resolver = TokioResolver::builder_with_config(
        ResolverConfig::default(),
        TokioConnectionProvider::default(),
    )
    .with_options(opts)
    .build();

    log::debug!(
        "DNS resolver initialized (timeout: {:?}, attempts: {})",
        timeout,
        attempts
    );
    Ok(Arc::new(resolver))
}
