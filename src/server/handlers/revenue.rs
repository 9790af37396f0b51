//! Revenue calculation handler.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use super::malformed_body;
use crate::error_handling::ApiError;
use crate::revenue::{calculate_revenue, RevenueReport, RevenueRequest};

/// `POST /api/calculate-revenue`
pub async fn calculate_revenue_handler(
    payload: Result<Json<RevenueRequest>, JsonRejection>,
) -> Result<Json<RevenueReport>, ApiError> {
    let Json(request) = payload.map_err(malformed_body)?;
    request.validate()?;

    log::info!(
        "Calculating revenue for industry {} ({:.2}/month)",
        request.industry,
        request.monthly_revenue
    );

    let report = calculate_revenue(&request)?;
    Ok(Json(report))
}
