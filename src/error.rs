//! Error types for the HTTP API
//!
//! The greeting operation cannot fail; the only API error is an unmatched route.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::NotFoundResponse;

// == Api Error Enum ==
/// Errors returned to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route matches the request
    #[error("Cannot {method} {path}")]
    NotFound { method: String, path: String },
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { method, path } => (
                StatusCode::NOT_FOUND,
                Json(NotFoundResponse::new(&method, &path)),
            )
                .into_response(),
        }
    }
}
