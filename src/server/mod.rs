//! HTTP API server.
//!
//! Provides five endpoints:
//! - `GET /` - service banner
//! - `GET /api/health` - liveness check
//! - `GET /api/industries` - revenue benchmark table
//! - `POST /api/check-deliverability` - DNS-based deliverability report
//! - `POST /api/calculate-revenue` - email/SMS revenue projection
//!
//! Every error response has the body `{"detail": "<message>"}`.

mod handlers;
mod middleware;
mod types;

use std::time::Duration;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::dns::DnsLookup;
use crate::error_handling::InitializationError;
use handlers::{
    calculate_revenue_handler, check_deliverability_handler, health_handler, industries_handler,
    root_handler,
};
use middleware::enforce_request_timeout;
pub use types::{AppState, DomainRequest, HealthResponse, RootResponse};

/// Builds the API router.
///
/// Requests running longer than `request_timeout` are answered with 408 and
/// a `{"detail"}` body. CORS is fully permissive.
pub fn build_router<R: DnsLookup>(state: AppState<R>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
        .route("/api/industries", get(industries_handler))
        .route(
            "/api/check-deliverability",
            post(check_deliverability_handler::<R>),
        )
        .route("/api/calculate-revenue", post(calculate_revenue_handler))
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            request_timeout,
            enforce_request_timeout,
        ))
        .layer(CorsLayer::permissive())
}

/// Binds `address` and serves `router` until Ctrl-C.
///
/// # Errors
///
/// Returns `InitializationError::BindError` if the address cannot be bound,
/// or an error if the server fails while running.
pub async fn start_server(address: &str, router: Router) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| InitializationError::BindError {
            address: address.to_string(),
            source: e,
        })?;

    log::info!("API server listening on http://{}/", address);
    log::info!("  - Deliverability: POST http://{}/api/check-deliverability", address);
    log::info!("  - Revenue: POST http://{}/api/calculate-revenue", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server error")?;

    log::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {e}");
        // Without a signal handler, serve until the process is killed
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received, draining connections");
}
