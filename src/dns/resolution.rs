//! Address resolution (A/AAAA records).

use std::net::IpAddr;

use hickory_resolver::TokioResolver;

use super::records::classify_resolve_error;
use crate::error_handling::DnsError;

/// Resolves a hostname to its IP addresses using DNS.
///
/// # Errors
///
/// Returns a `DnsError` if DNS resolution fails or no addresses are found.
pub async fn resolve_host_addresses(
    host: &str,
    resolver: &TokioResolver,
) -> Result<Vec<IpAddr>, DnsError> {
    let response = resolver
        .lookup_ip(host)
        .await
        .map_err(|e| classify_resolve_error(host, &e))?;
    let addresses: Vec<IpAddr> = response.iter().collect();
    if addresses.is_empty() {
        return Err(DnsError::NoRecords(host.to_string()));
    }
    Ok(addresses)
}
