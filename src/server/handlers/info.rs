//! Informational endpoints.

use axum::Json;

use super::super::types::{HealthResponse, RootResponse};
use crate::revenue::{IndustryBenchmark, INDUSTRY_BENCHMARKS};

pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Email Marketing Deliverability & Revenue Calculator API",
    })
}

/// Liveness check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "API is running",
    })
}

/// The industry benchmark table, in table order
pub async fn industries_handler() -> Json<&'static [IndustryBenchmark]> {
    Json(INDUSTRY_BENCHMARKS)
}
