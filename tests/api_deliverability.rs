//! End-to-end tests for `POST /api/check-deliverability`.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;

use deliverability_api::deliverability::DKIM_SELECTORS;
use deliverability_api::dns::DnsError;
use deliverability_api::{DeliverabilityChecker, StaticResolver};
use helpers::{
    healthy_domain, post_json, post_raw, send, test_router, test_router_for_checker,
    test_router_with_timeouts,
};

const ENDPOINT: &str = "/api/check-deliverability";

#[tokio::test]
async fn test_healthy_domain_scores_100() {
    let router = test_router(healthy_domain(StaticResolver::new(), "example.com"));
    let (status, body) = post_json(router, ENDPOINT, &json!({"domain": "example.com"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domain"], "example.com");
    assert_eq!(body["overall_score"], 100);
    assert_eq!(
        body["summary"],
        "Excellent! Your email setup looks great with strong authentication."
    );
    assert_eq!(body["recommendations"], json!([]));

    let checks = body["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 5);
    assert!(checks.iter().all(|c| c["passed"] == true));
    assert_eq!(
        checks[2]["result"],
        "DKIM record found (selector: selector1): v=DKIM1; k=rsa; p=MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQC"
    );
}

#[tokio::test]
async fn test_url_input_is_normalized() {
    let resolver = healthy_domain(StaticResolver::new(), "example.com");

    let (_, plain) = post_json(
        test_router(resolver.clone()),
        ENDPOINT,
        &json!({"domain": "example.com"}),
    )
    .await;
    let (status, url) = post_json(
        test_router(resolver),
        ENDPOINT,
        &json!({"domain": "  https://Example.com/ "}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(url["domain"], "example.com");
    assert_eq!(plain, url);
}

#[tokio::test]
async fn test_unknown_domain_still_returns_report() {
    let router = test_router(StaticResolver::new());
    let (status, body) = post_json(router, ENDPOINT, &json!({"domain": "nowhere.example"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_score"], 0);
    assert_eq!(
        body["summary"],
        "Your email setup needs attention to improve deliverability."
    );
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 6);
    assert_eq!(recommendations[5]["title"], "Regular Monitoring");
    assert!(recommendations
        .iter()
        .all(|r| r["description"].as_str().is_some_and(|d| !d.is_empty())));
}

#[tokio::test]
async fn test_partial_setup_is_good_band() {
    // Everything except DMARC
    let resolver = StaticResolver::new()
        .with_mx("shop.example", 5, "mx.shop.example")
        .with_txt("shop.example", "v=spf1 -all")
        .with_txt("k1._domainkey.shop.example", "v=DKIM1; p=ABC")
        .with_ip("shop.example", "2001:db8::1".parse().unwrap());
    let (status, body) =
        post_json(test_router(resolver), ENDPOINT, &json!({"domain": "shop.example"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_score"], 80);
    assert_eq!(body["checks"][3]["passed"], false);
    assert!(body["checks"][3]["result"]
        .as_str()
        .unwrap()
        .starts_with("Error checking DMARC record: "));
    assert_eq!(
        body["checks"][4]["result"],
        "Domain resolves successfully (2001:db8::1)"
    );
    let titles: Vec<&str> = body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Implement DMARC Policy", "Regular Monitoring"]);
}

#[tokio::test]
async fn test_dns_server_failure_is_reported_in_check() {
    let resolver = healthy_domain(StaticResolver::new(), "example.com").with_failure(
        "_dmarc.example.com",
        DnsError::Other("SERVFAIL".to_string()),
    );
    let (status, body) =
        post_json(test_router(resolver), ENDPOINT, &json!({"domain": "example.com"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_score"], 80);
    assert_eq!(
        body["checks"][3]["result"],
        "Error checking DMARC record: SERVFAIL"
    );
}

#[tokio::test]
async fn test_invalid_domain_is_422() {
    for input in ["not a domain", "localhost", "exa_mple.com", "example.c0m"] {
        let (status, body) = post_json(
            test_router(StaticResolver::new()),
            ENDPOINT,
            &json!({ "domain": input }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "input: {input}");
        assert_eq!(body["detail"], "Invalid domain format");
    }
}

#[tokio::test]
async fn test_empty_domain_is_422() {
    for input in ["", "   "] {
        let (status, body) = post_json(
            test_router(StaticResolver::new()),
            ENDPOINT,
            &json!({ "domain": input }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Domain is required");
    }
}

#[tokio::test]
async fn test_overlong_domain_is_422() {
    let domain = format!("{}.com", vec!["a".repeat(60); 5].join("."));
    let (status, body) = post_json(
        test_router(StaticResolver::new()),
        ENDPOINT,
        &json!({ "domain": domain }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("too long"));
}

#[tokio::test]
async fn test_malformed_body_is_422() {
    let cases = ["{}", "{\"domain\": 42}", "not json", ""];
    for raw in cases {
        let (status, body) = post_raw(test_router(StaticResolver::new()), ENDPOINT, raw).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {raw:?}");
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body: "),
            "detail: {}",
            body["detail"]
        );
    }
}

#[tokio::test]
async fn test_missing_content_type_is_422() {
    let request = Request::builder()
        .method(Method::POST)
        .uri(ENDPOINT)
        .body(Body::from(r#"{"domain": "example.com"}"#))
        .unwrap();
    let (status, body) = send(test_router(StaticResolver::new()), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_slow_dns_fails_checks_not_request() {
    let resolver = healthy_domain(StaticResolver::new(), "example.com")
        .with_delay("example.com", Duration::from_secs(5));
    let router = test_router_with_timeouts(
        resolver,
        Duration::from_millis(50),
        Duration::from_secs(10),
    );
    let (status, body) = post_json(router, ENDPOINT, &json!({"domain": "example.com"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_score"], 40);
    assert!(body["checks"][0]["result"]
        .as_str()
        .unwrap()
        .contains("timed out"));
}

#[tokio::test]
async fn test_request_timeout_is_408() {
    let resolver = healthy_domain(StaticResolver::new(), "example.com")
        .with_delay("example.com", Duration::from_secs(5));
    let router = test_router_with_timeouts(
        resolver,
        Duration::from_secs(10),
        Duration::from_millis(100),
    );
    let (status, body) = post_json(router, ENDPOINT, &json!({"domain": "example.com"})).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body, json!({"detail": "Request timed out after 0.1s"}));
}

#[tokio::test]
async fn test_dns_outage_with_sequential_dkim_scan_is_still_a_report() {
    // Every selector hangs and only one DKIM lookup runs at a time
    let resolver = DKIM_SELECTORS
        .iter()
        .fold(healthy_domain(StaticResolver::new(), "example.com"), |r, selector| {
            r.with_delay(
                &format!("{selector}._domainkey.example.com"),
                Duration::from_secs(5),
            )
        });
    let checker = DeliverabilityChecker::new(Arc::new(resolver))
        .with_lookup_timeout(Duration::from_millis(40))
        .with_dkim_concurrency(1);
    let router = test_router_for_checker(checker);

    let (status, body) = post_json(router, ENDPOINT, &json!({"domain": "example.com"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overall_score"], 80);
    assert_eq!(body["checks"][2]["passed"], false);
}
