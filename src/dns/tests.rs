//! DNS module tests.

use super::*;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

fn records(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_strip_quotes() {
    assert_eq!(strip_quotes("\"v=spf1 -all\""), "v=spf1 -all");
    assert_eq!(strip_quotes("  v=spf1 -all  "), "v=spf1 -all");
    assert_eq!(strip_quotes("\"unbalanced"), "unbalanced");
    assert_eq!(strip_quotes("\"\""), "");
}

#[test]
fn test_extract_spf_record_found() {
    let txt = records(&[
        "google-site-verification=abc",
        "v=spf1 include:_spf.google.com ~all",
    ]);
    assert_eq!(
        extract_spf_record(&txt),
        Some("v=spf1 include:_spf.google.com ~all".to_string())
    );
}

#[test]
fn test_extract_spf_record_quoted() {
    let txt = records(&["\"v=spf1 mx -all\""]);
    assert_eq!(extract_spf_record(&txt), Some("v=spf1 mx -all".to_string()));
}

#[test]
fn test_extract_spf_record_must_be_prefix() {
    let txt = records(&["note: v=spf1 lives elsewhere", "V=SPF1 -all"]);
    assert_eq!(extract_spf_record(&txt), None);
}

#[test]
fn test_extract_dmarc_record() {
    let txt = records(&["v=DMARC1; p=reject; rua=mailto:d@example.com"]);
    assert_eq!(
        extract_dmarc_record(&txt),
        Some("v=DMARC1; p=reject; rua=mailto:d@example.com".to_string())
    );
    assert_eq!(extract_dmarc_record(&records(&["v=spf1 -all"])), None);
    assert_eq!(extract_dmarc_record(&[]), None);
}

#[test]
fn test_extract_dkim_record_requires_key_tag() {
    assert_eq!(
        extract_dkim_record(&records(&["v=DKIM1; k=rsa; p=MIGfMA0G"])),
        Some("v=DKIM1; k=rsa; p=MIGfMA0G".to_string())
    );
    assert_eq!(extract_dkim_record(&records(&["v=DKIM1; k=rsa"])), None);
}

#[tokio::test]
async fn test_static_resolver_answers_configured_records() {
    let resolver = StaticResolver::new()
        .with_mx("example.com", 20, "backup.example.com")
        .with_mx("example.com", 10, "mx.example.com")
        .with_txt("example.com", "v=spf1 -all")
        .with_ip("example.com", IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)));

    let mx = resolver.lookup_mx("example.com").await.unwrap();
    assert_eq!(
        mx,
        vec![
            (10, "mx.example.com".to_string()),
            (20, "backup.example.com".to_string())
        ]
    );
    assert_eq!(
        resolver.lookup_txt("example.com").await.unwrap(),
        vec!["v=spf1 -all".to_string()]
    );
    assert_eq!(resolver.lookup_ip("example.com").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_static_resolver_unknown_name_is_nxdomain() {
    let resolver = StaticResolver::new();
    let err = resolver.lookup_mx("missing.example").await.unwrap_err();
    assert_eq!(err, DnsError::NxDomain("missing.example".to_string()));
}

#[tokio::test]
async fn test_static_resolver_known_name_without_type_is_no_records() {
    let resolver = StaticResolver::new().with_txt("example.com", "hello");
    let err = resolver.lookup_mx("example.com").await.unwrap_err();
    assert_eq!(err, DnsError::NoRecords("example.com".to_string()));
}

#[tokio::test]
async fn test_static_resolver_configured_failure() {
    let resolver = StaticResolver::new()
        .with_txt("example.com", "v=spf1 -all")
        .with_failure("example.com", DnsError::Other("SERVFAIL".to_string()));
    let err = resolver.lookup_txt("example.com").await.unwrap_err();
    assert_eq!(err, DnsError::Other("SERVFAIL".to_string()));
}

#[tokio::test]
async fn test_static_resolver_clones_share_nothing_after_build() {
    let base = StaticResolver::new().with_txt("a.example", "one");
    let extended = base.clone().with_txt("b.example", "two");
    assert!(base.lookup_txt("b.example").await.is_err());
    assert!(extended.lookup_txt("a.example").await.is_ok());
    assert!(extended.lookup_txt("b.example").await.is_ok());
}

#[tokio::test]
async fn test_static_resolver_delay() {
    let resolver = StaticResolver::new()
        .with_txt("slow.example", "v=spf1 -all")
        .with_delay("slow.example", Duration::from_millis(200));
    let timed = tokio::time::timeout(
        Duration::from_millis(20),
        resolver.lookup_txt("slow.example"),
    )
    .await;
    assert!(timed.is_err(), "lookup should still be sleeping");
}

/// Creates a resolver against the public internet with short timeouts.
fn create_test_resolver() -> HickoryLookup {
    let resolver = crate::initialization::init_resolver(Duration::from_secs(5), 1)
        .expect("resolver should build");
    HickoryLookup::new(resolver)
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_hickory_lookup_live_domain() {
    let resolver = create_test_resolver();
    let mx = resolver.lookup_mx("google.com").await;
    assert!(mx.is_ok(), "MX lookup should succeed for google.com");
    let txt = resolver.lookup_txt("google.com").await.unwrap();
    assert!(extract_spf_record(&txt).is_some());
    assert!(!resolver.lookup_ip("google.com").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_hickory_lookup_nonexistent_domain() {
    let resolver = create_test_resolver();
    let result = resolver
        .lookup_mx("definitely-does-not-exist-12345.invalid")
        .await;
    assert!(result.is_err());
}
