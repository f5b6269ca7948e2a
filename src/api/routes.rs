//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{data_handler, health_handler, not_found_handler, AppState};

/// Global prefix the greeting is served under
pub const API_PREFIX: &str = "/api";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api` and `GET /api/` - Fixed greeting
/// - `GET /health` - Health check endpoint
/// - anything else, including other methods on the routes above - 404 with a JSON body
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(API_PREFIX, get(data_handler).fallback(not_found_handler))
        .route(
            &format!("{}/", API_PREFIX),
            get(data_handler).fallback(not_found_handler),
        )
        .route("/health", get(health_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
