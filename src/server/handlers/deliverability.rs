//! Deliverability check handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tokio::task::JoinHandle;

use super::super::types::{AppState, DomainRequest};
use super::malformed_body;
use crate::deliverability::DeliverabilityReport;
use crate::dns::DnsLookup;
use crate::domain::DomainName;
use crate::error_handling::ApiError;

/// Aborts the task when dropped, so a request that hits its deadline does
/// not leave the check running.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// `POST /api/check-deliverability`
///
/// DNS failures never fail the request; they show up as failed checks. The
/// check runs on its own task so a panic inside it becomes a 500 response
/// instead of a dropped connection.
pub async fn check_deliverability_handler<R: DnsLookup>(
    State(state): State<AppState<R>>,
    payload: Result<Json<DomainRequest>, JsonRejection>,
) -> Result<Json<DeliverabilityReport>, ApiError> {
    let Json(request) = payload.map_err(malformed_body)?;
    let domain = DomainName::parse(&request.domain)?;

    log::info!("Checking deliverability for {domain}");

    let checker = state.checker.clone();
    let mut task = AbortOnDrop(tokio::spawn(async move { checker.check(&domain).await }));
    let report = (&mut task.0)
        .await
        .map_err(|e| ApiError::Internal(format!("Error checking deliverability: {e}")))?;

    Ok(Json(report))
}
