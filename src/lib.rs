//! SRE Interview - Hello API service
//!
//! Serves a fixed greeting and runs a background response cache warmup.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod warmup;

pub use api::AppState;
pub use config::Config;
pub use service::DataService;
