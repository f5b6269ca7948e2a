//! API Module
//!
//! HTTP handlers and routing for the service.
//!
//! # Endpoints
//! - `GET /api` - Fixed greeting
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, API_PREFIX};
