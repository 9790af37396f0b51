//! The five deliverability checks.
//!
//! Each check performs its own lookups and always produces a `CheckResult`;
//! DNS failures become failed results carrying the error text.

use std::future::Future;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use strum_macros::EnumIter;

use super::selectors::DKIM_SELECTORS;
use super::DeliverabilityChecker;
use crate::config::{DKIM_RECORD_EXCERPT_CHARS, POLICY_RECORD_EXCERPT_CHARS};
use crate::dns::{
    extract_dkim_record, extract_dmarc_record, extract_spf_record, DnsError, DnsLookup,
};
use crate::domain::DomainName;
use crate::utils::{excerpt, sanitize_and_truncate_error_message, truncate_chars};

const NO_DKIM_RECORD_MESSAGE: &str = "No DKIM records found with common selectors. Consider checking your email service provider documentation for the correct DKIM selector.";

/// Which check produced a result. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CheckKind {
    Mx,
    Spf,
    Dkim,
    Dmarc,
    Resolution,
}

impl CheckKind {
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Mx => "MX Record Check",
            CheckKind::Spf => "SPF Record Check",
            CheckKind::Dkim => "DKIM Record Check",
            CheckKind::Dmarc => "DMARC Record Check",
            CheckKind::Resolution => "Domain Resolution",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CheckKind::Mx => "Verifies that your domain can receive emails",
            CheckKind::Spf => "Sender Policy Framework helps prevent email spoofing",
            CheckKind::Dkim => {
                "DomainKeys Identified Mail provides email authentication and helps prevent spoofing"
            }
            CheckKind::Dmarc => {
                "Domain-based Message Authentication helps with email authentication"
            }
            CheckKind::Resolution => "Checks if the domain resolves properly",
        }
    }
}

/// Outcome of one check, as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    #[serde(skip)]
    pub kind: CheckKind,
    pub name: &'static str,
    pub description: &'static str,
    pub passed: bool,
    /// Human-readable detail or error message
    pub result: String,
}

impl CheckResult {
    pub fn passed(kind: CheckKind, result: impl Into<String>) -> Self {
        Self::new(kind, true, result.into())
    }

    pub fn failed(kind: CheckKind, result: impl Into<String>) -> Self {
        Self::new(kind, false, result.into())
    }

    fn new(kind: CheckKind, passed: bool, result: String) -> Self {
        Self {
            kind,
            name: kind.name(),
            description: kind.description(),
            passed,
            result,
        }
    }
}

/// A DKIM key record found under one of the probed selectors.
struct DkimMatch {
    selector: &'static str,
    record: String,
}

fn error_text(e: &DnsError) -> String {
    sanitize_and_truncate_error_message(&e.to_string())
}

impl<R: DnsLookup> DeliverabilityChecker<R> {
    /// Runs a lookup under the per-lookup timeout.
    async fn timed<T>(
        &self,
        name: &str,
        lookup: impl Future<Output = Result<T, DnsError>>,
    ) -> Result<T, DnsError> {
        tokio::time::timeout(self.lookup_timeout, lookup)
            .await
            .unwrap_or_else(|_| Err(DnsError::Timeout(name.to_string())))
    }

    pub(super) async fn check_mx(&self, domain: &DomainName) -> CheckResult {
        let name = domain.as_str();
        match self.timed(name, self.resolver.lookup_mx(name)).await {
            Ok(records) if !records.is_empty() => CheckResult::passed(
                CheckKind::Mx,
                format!("Found {} MX record(s)", records.len()),
            ),
            Ok(_) => CheckResult::failed(CheckKind::Mx, "No MX records found"),
            Err(e) => {
                log::debug!("MX check failed for {domain}: {e}");
                CheckResult::failed(
                    CheckKind::Mx,
                    format!("Error checking MX records: {}", error_text(&e)),
                )
            }
        }
    }

    pub(super) async fn check_spf(&self, domain: &DomainName) -> CheckResult {
        let name = domain.as_str();
        match self.timed(name, self.resolver.lookup_txt(name)).await {
            Ok(records) => match extract_spf_record(&records) {
                Some(spf) => CheckResult::passed(
                    CheckKind::Spf,
                    format!(
                        "SPF record found: {}...",
                        truncate_chars(&spf, POLICY_RECORD_EXCERPT_CHARS)
                    ),
                ),
                None => CheckResult::failed(CheckKind::Spf, "No SPF record found"),
            },
            Err(e) => {
                log::debug!("SPF check failed for {domain}: {e}");
                CheckResult::failed(
                    CheckKind::Spf,
                    format!("Error checking SPF record: {}", error_text(&e)),
                )
            }
        }
    }

    /// Probes the common selectors with at most `dkim_concurrency` lookups in
    /// flight. Results are consumed in selector order, so the first selector
    /// in priority order with a key wins; the remaining lookups are dropped.
    pub(super) async fn check_dkim(&self, domain: &DomainName) -> CheckResult {
        // Futures are lazy; nothing is sent until the stream polls them
        let lookups: Vec<_> = DKIM_SELECTORS
            .iter()
            .map(|&selector| self.probe_selector(domain, selector))
            .collect();
        let mut probes = stream::iter(lookups).buffered(self.dkim_concurrency);

        while let Some(probe) = probes.next().await {
            if let Some(found) = probe {
                return CheckResult::passed(
                    CheckKind::Dkim,
                    format!(
                        "DKIM record found (selector: {}): {}",
                        found.selector,
                        excerpt(&found.record, DKIM_RECORD_EXCERPT_CHARS)
                    ),
                );
            }
        }

        CheckResult::failed(CheckKind::Dkim, NO_DKIM_RECORD_MESSAGE)
    }

    async fn probe_selector(
        &self,
        domain: &DomainName,
        selector: &'static str,
    ) -> Option<DkimMatch> {
        let name = domain.dkim_record_name(selector);
        match self.timed(&name, self.resolver.lookup_txt(&name)).await {
            Ok(records) => {
                extract_dkim_record(&records).map(|record| DkimMatch { selector, record })
            }
            Err(e) => {
                log::debug!("No DKIM key at {name}: {e}");
                None
            }
        }
    }

    pub(super) async fn check_dmarc(&self, domain: &DomainName) -> CheckResult {
        let name = domain.dmarc_record_name();
        match self.timed(&name, self.resolver.lookup_txt(&name)).await {
            Ok(records) => match extract_dmarc_record(&records) {
                Some(dmarc) => CheckResult::passed(
                    CheckKind::Dmarc,
                    format!(
                        "DMARC record found: {}...",
                        truncate_chars(&dmarc, POLICY_RECORD_EXCERPT_CHARS)
                    ),
                ),
                None => CheckResult::failed(CheckKind::Dmarc, "No DMARC record found"),
            },
            Err(e) => {
                log::debug!("DMARC check failed for {domain}: {e}");
                CheckResult::failed(
                    CheckKind::Dmarc,
                    format!("Error checking DMARC record: {}", error_text(&e)),
                )
            }
        }
    }

    pub(super) async fn check_resolution(&self, domain: &DomainName) -> CheckResult {
        let name = domain.as_str();
        match self.timed(name, self.resolver.lookup_ip(name)).await {
            Ok(addresses) => match addresses.first() {
                Some(address) => CheckResult::passed(
                    CheckKind::Resolution,
                    format!("Domain resolves successfully ({address})"),
                ),
                None => CheckResult::failed(
                    CheckKind::Resolution,
                    "Domain resolution failed: no addresses returned",
                ),
            },
            Err(e) => {
                log::debug!("Resolution check failed for {domain}: {e}");
                CheckResult::failed(
                    CheckKind::Resolution,
                    format!("Domain resolution failed: {}", error_text(&e)),
                )
            }
        }
    }
}
