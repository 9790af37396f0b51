//! Email deliverability checking.
//!
//! Inspects a domain's DNS and reports five independent checks:
//! - MX: the domain can receive mail
//! - SPF: a `v=spf1` policy is published
//! - DKIM: a key record exists under one of the common selectors
//! - DMARC: a `v=DMARC1` policy is published at `_dmarc.<domain>`
//! - Resolution: the domain has A/AAAA records
//!
//! The checks run concurrently and never fail the request; a DNS error only
//! fails the check it belongs to. The report carries a percentage score, a
//! summary band and recommendations for every failed check.

mod checks;
mod recommendations;
mod report;
mod scoring;
mod selectors;

use std::sync::Arc;
use std::time::Duration;

use crate::config::{DKIM_CONCURRENCY, DNS_TIMEOUT_SECS};
use crate::dns::DnsLookup;
use crate::domain::DomainName;

pub use checks::{CheckKind, CheckResult};
pub use recommendations::{generate_recommendations, Recommendation};
pub use report::DeliverabilityReport;
pub use scoring::{overall_score, ScoreBand};
pub use selectors::DKIM_SELECTORS;

/// Longest a full `DeliverabilityChecker::check` can take when every lookup
/// runs into `lookup_timeout`.
///
/// The DKIM scan dominates: `ceil(selectors / concurrency)` lookups back to
/// back. One more lookup period and a quarter on top cover scheduling and
/// timer slack.
pub fn worst_case_check_duration(lookup_timeout: Duration, dkim_concurrency: usize) -> Duration {
    let sequential = DKIM_SELECTORS.len().div_ceil(dkim_concurrency.max(1)) + 1;
    let sequential = u32::try_from(sequential).unwrap_or(u32::MAX);
    lookup_timeout.saturating_mul(sequential).saturating_mul(5) / 4
}

/// Runs deliverability checks against a `DnsLookup` implementation.
pub struct DeliverabilityChecker<R> {
    resolver: Arc<R>,
    lookup_timeout: Duration,
    dkim_concurrency: usize,
}

impl<R: DnsLookup> DeliverabilityChecker<R> {
    pub fn new(resolver: Arc<R>) -> Self {
        Self {
            resolver,
            lookup_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            dkim_concurrency: DKIM_CONCURRENCY,
        }
    }

    /// Upper bound on any single lookup, on top of the resolver's own timeout.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Maximum DKIM selector lookups in flight. Zero is treated as one.
    pub fn with_dkim_concurrency(mut self, concurrency: usize) -> Self {
        self.dkim_concurrency = concurrency.max(1);
        self
    }

    /// `worst_case_check_duration` for this checker's settings.
    pub fn worst_case_duration(&self) -> Duration {
        worst_case_check_duration(self.lookup_timeout, self.dkim_concurrency)
    }

    /// Runs all five checks and builds the report.
    pub async fn check(&self, domain: &DomainName) -> DeliverabilityReport {
        let (mx, spf, dkim, dmarc, resolution) = tokio::join!(
            self.check_mx(domain),
            self.check_spf(domain),
            self.check_dkim(domain),
            self.check_dmarc(domain),
            self.check_resolution(domain),
        );

        let report =
            DeliverabilityReport::from_checks(domain, vec![mx, spf, dkim, dmarc, resolution]);
        log::info!(
            "Deliverability for {}: score {} ({}/{} checks passed)",
            domain,
            report.overall_score,
            report.passed_count(),
            report.checks.len()
        );
        report
    }
}
