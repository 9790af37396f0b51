//! `DnsLookup` backed by hickory-resolver.

use std::net::IpAddr;
use std::sync::Arc;

use hickory_resolver::TokioResolver;

use super::records::{lookup_mx_records, lookup_txt_records};
use super::resolution::resolve_host_addresses;
use super::DnsLookup;
use crate::error_handling::DnsError;

/// Production resolver, cheap to clone.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioResolver>,
}

impl HickoryLookup {
    pub fn new(resolver: Arc<TokioResolver>) -> Self {
        Self { resolver }
    }
}

impl DnsLookup for HickoryLookup {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<(u16, String)>, DnsError> {
        lookup_mx_records(domain, &self.resolver).await
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        lookup_txt_records(name, &self.resolver).await
    }

    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, DnsError> {
        resolve_host_addresses(host, &self.resolver).await
    }
}
