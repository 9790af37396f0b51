//! Server state and request/response bodies.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::deliverability::DeliverabilityChecker;

/// Shared state for the API handlers
pub struct AppState<R> {
    pub checker: Arc<DeliverabilityChecker<R>>,
}

impl<R> AppState<R> {
    pub fn new(checker: DeliverabilityChecker<R>) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

// Derived Clone would require `R: Clone`
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            checker: Arc::clone(&self.checker),
        }
    }
}

/// Body of `POST /api/check-deliverability`
#[derive(Debug, Deserialize)]
pub struct DomainRequest {
    pub domain: String,
}

/// JSON response for `/`
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// JSON response for `/api/health`
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}
