//! Request deadline.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error_handling::ApiError;

/// Answers with 408 and the usual `{"detail"}` body once a request has run
/// for `limit`. The handler future is dropped at that point.
pub async fn enforce_request_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            log::warn!("{method} {path} exceeded the {limit:?} request timeout");
            ApiError::Timeout(limit).into_response()
        }
    }
}
