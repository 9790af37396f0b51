//! DNS record queries (MX, TXT).
//!
//! Every failure, including an answer without records of the requested type,
//! is returned as a classified `DnsError`.

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::proto::ProtoErrorKind;
use hickory_resolver::{ResolveError, TokioResolver};

use crate::error_handling::DnsError;

/// Maps a resolver error onto the `DnsError` classes.
///
/// NXDOMAIN and an empty NOERROR answer share hickory's `NoRecordsFound`
/// kind; the response code carried with it tells them apart.
pub(crate) fn classify_resolve_error(name: &str, e: &ResolveError) -> DnsError {
    if e.is_nx_domain() {
        DnsError::NxDomain(name.to_string())
    } else if e.is_no_records_found() {
        DnsError::NoRecords(name.to_string())
    } else if e
        .proto()
        .is_some_and(|proto| matches!(proto.kind(), ProtoErrorKind::Timeout))
    {
        DnsError::Timeout(name.to_string())
    } else {
        DnsError::Other(e.to_string())
    }
}

/// Queries TXT (text) records for a name.
///
/// TXT records can contain multiple character strings; they are joined into a
/// single value per record.
///
/// # Errors
///
/// Returns a `DnsError` if the lookup fails or the answer holds no TXT records.
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioResolver,
) -> Result<Vec<String>, DnsError> {
    match resolver.lookup(name, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            if txt_records.is_empty() {
                return Err(DnsError::NoRecords(name.to_string()));
            }
            Ok(txt_records)
        }
        Err(e) => {
            let error = classify_resolve_error(name, &e);
            if matches!(error, DnsError::Timeout(_)) {
                log::warn!("TXT record lookup timed out for {name}: {e}");
            } else {
                log::debug!("TXT record lookup failed for {name}: {e}");
            }
            Err(error)
        }
    }
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Returns
///
/// A vector of (priority, hostname) tuples, sorted by priority (lower = higher priority).
///
/// # Errors
///
/// Returns a `DnsError` if the lookup fails or the answer holds no MX records.
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioResolver,
) -> Result<Vec<(u16, String)>, DnsError> {
    match resolver.lookup(domain, RecordType::MX).await {
        Ok(lookup) => {
            let mut mx_records: Vec<(u16, String)> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::MX(mx) = rdata {
                        Some((mx.preference(), mx.exchange().to_utf8()))
                    } else {
                        None
                    }
                })
                .collect();
            if mx_records.is_empty() {
                return Err(DnsError::NoRecords(domain.to_string()));
            }
            mx_records.sort_by_key(|(priority, _)| *priority);
            Ok(mx_records)
        }
        Err(e) => {
            let error = classify_resolve_error(domain, &e);
            if matches!(error, DnsError::Timeout(_)) {
                log::warn!("MX record lookup timed out for {domain}: {e}");
            } else {
                log::debug!("MX record lookup failed for {domain}: {e}");
            }
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::proto::op::{Query, ResponseCode};
    use hickory_resolver::proto::ProtoError;
    use hickory_resolver::Name;

    fn no_records_error(name: &str, response_code: ResponseCode) -> ResolveError {
        let query = Query::query(Name::from_ascii(name).unwrap(), RecordType::TXT);
        ProtoError::nx_error(
            Box::new(query),
            None,
            None,
            None,
            response_code,
            false,
            None,
        )
        .into()
    }

    #[test]
    fn test_nxdomain_is_classified_as_nxdomain() {
        let e = no_records_error("nope.example.com.", ResponseCode::NXDomain);
        assert_eq!(
            classify_resolve_error("nope.example.com", &e),
            DnsError::NxDomain("nope.example.com".to_string())
        );
    }

    #[test]
    fn test_empty_answer_is_classified_as_no_records() {
        let e = no_records_error("example.com.", ResponseCode::NoError);
        assert_eq!(
            classify_resolve_error("example.com", &e),
            DnsError::NoRecords("example.com".to_string())
        );
    }

    #[test]
    fn test_proto_timeout_is_classified_as_timeout() {
        let e: ResolveError = ProtoError::from(ProtoErrorKind::Timeout).into();
        assert_eq!(
            classify_resolve_error("slow.example.com", &e),
            DnsError::Timeout("slow.example.com".to_string())
        );
    }

    #[test]
    fn test_other_errors_keep_resolver_message() {
        let e: ResolveError = ProtoError::from("connection refused").into();
        match classify_resolve_error("example.com", &e) {
            DnsError::Other(message) => assert!(message.contains("connection refused")),
            other => panic!("expected Other, got {other:?}"),
        }
    }
}
