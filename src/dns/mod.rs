//! DNS resolution and record querying.
//!
//! This module provides async DNS operations behind the `DnsLookup` trait:
//! - IP address resolution (A/AAAA records)
//! - Text record queries (TXT records) with SPF/DMARC/DKIM extraction
//! - Mail exchanger queries (MX records)
//!
//! `HickoryLookup` performs real lookups with `hickory-resolver`;
//! `StaticResolver` answers from an in-memory table.

mod extract;
mod hickory;
mod records;
mod resolution;
mod static_resolver;

use std::future::Future;
use std::net::IpAddr;

pub use crate::error_handling::DnsError;
pub use extract::{extract_dkim_record, extract_dmarc_record, extract_spf_record, strip_quotes};
pub use hickory::HickoryLookup;
pub use records::{lookup_mx_records, lookup_txt_records};
pub use resolution::resolve_host_addresses;
pub use static_resolver::StaticResolver;

/// The DNS queries the deliverability checks need.
///
/// Every method reports failure as a `DnsError`; an answer with no records of
/// the requested type is an error too (`DnsError::NoRecords`).
pub trait DnsLookup: Send + Sync + 'static {
    /// MX records as (preference, exchange), lowest preference first.
    fn lookup_mx(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<(u16, String)>, DnsError>> + Send;

    /// TXT records, each record's character strings joined.
    fn lookup_txt(&self, name: &str) -> impl Future<Output = Result<Vec<String>, DnsError>> + Send;

    /// A and AAAA records.
    fn lookup_ip(&self, host: &str) -> impl Future<Output = Result<Vec<IpAddr>, DnsError>> + Send;
}

#[cfg(test)]
mod tests;
