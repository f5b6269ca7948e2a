//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use axum::{
    extract::State,
    http::{Method, Uri},
    Json,
};

use crate::error::ApiError;
use crate::models::{DataResponse, HealthResponse};
use crate::service::DataService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Greeting service; owns the cache warmup
    pub service: DataService,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: DataService) -> Self {
        Self { service }
    }
}

/// Handler for GET /api
///
/// Returns the fixed greeting.
pub async fn data_handler(State(state): State<AppState>) -> Json<DataResponse> {
    Json(state.service.get_data())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for every unmatched route.
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
