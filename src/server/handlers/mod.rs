//! API HTTP handlers.

mod deliverability;
mod info;
mod revenue;

pub use deliverability::check_deliverability_handler;
pub use info::{health_handler, industries_handler, root_handler};
pub use revenue::calculate_revenue_handler;

use axum::extract::rejection::JsonRejection;

use crate::error_handling::ValidationError;

/// Converts a body extraction failure into a 422 validation error.
pub(super) fn malformed_body(rejection: JsonRejection) -> ValidationError {
    ValidationError::MalformedBody(rejection.body_text())
}
