// Shared test helpers for driving the API router in-process.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use deliverability_api::{build_router, AppState, DeliverabilityChecker, StaticResolver};

/// Builds the router over an in-memory resolver.
#[allow(dead_code)] // Used by other test files
pub fn test_router(resolver: StaticResolver) -> Router {
    test_router_with_timeouts(resolver, Duration::from_secs(1), Duration::from_secs(10))
}

/// Builds the router with explicit per-lookup and whole-request timeouts.
#[allow(dead_code)]
pub fn test_router_with_timeouts(
    resolver: StaticResolver,
    lookup_timeout: Duration,
    request_timeout: Duration,
) -> Router {
    let checker = DeliverabilityChecker::new(Arc::new(resolver)).with_lookup_timeout(lookup_timeout);
    build_router(AppState::new(checker), request_timeout)
}

/// Builds the router over `checker`, with the whole-request timeout set to
/// the checker's worst-case duration.
#[allow(dead_code)]
pub fn test_router_for_checker(checker: DeliverabilityChecker<StaticResolver>) -> Router {
    let request_timeout = checker.worst_case_duration();
    build_router(AppState::new(checker), request_timeout)
}

/// DNS data for a domain with MX, SPF, DKIM, DMARC and an A record.
#[allow(dead_code)]
pub fn healthy_domain(resolver: StaticResolver, domain: &str) -> StaticResolver {
    resolver
        .with_mx(domain, 10, &format!("mx.{domain}"))
        .with_txt(domain, "v=spf1 include:_spf.google.com ~all")
        .with_txt(
            &format!("selector1._domainkey.{domain}"),
            "v=DKIM1; k=rsa; p=MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQC",
        )
        .with_txt(&format!("_dmarc.{domain}"), "v=DMARC1; p=none")
        .with_ip(domain, IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)))
}

/// Sends a request and returns the status and the body parsed as JSON
/// (`Value::Null` for an empty body).
#[allow(dead_code)]
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .oneshot(request)
        .await
        .expect("Router should not fail");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body should be JSON")
    };
    (status, body)
}

#[allow(dead_code)]
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(router, request).await
}

#[allow(dead_code)]
pub async fn post_json(router: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(router, uri, &body.to_string()).await
}

/// Posts `body` verbatim with a JSON content type.
#[allow(dead_code)]
pub async fn post_raw(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(router, request).await
}
