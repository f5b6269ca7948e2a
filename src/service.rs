//! Data Service Module
//!
//! Answers the greeting query and owns the response cache warmup.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::models::DataResponse;
use crate::tasks::spawn_warmup_task;
use crate::warmup::{GrowthBuffer, GrowthLimits, WARMUP_INTERVAL_MS};

/// Message returned by [`DataService::get_data`]
pub const GREETING: &str = "Hello API";

// == Data Service ==
/// Service behind the `/api` route.
///
/// Construction starts the warmup task. The task holds its own handle to the
/// buffer and is never stopped by the service.
#[derive(Debug, Clone)]
pub struct DataService {
    warmup: Arc<RwLock<GrowthBuffer>>,
}

impl DataService {
    // == Constructor ==
    /// Creates the service with the default limits and a 100 ms warmup interval.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        Self::with_limits(
            GrowthLimits::default(),
            Duration::from_millis(WARMUP_INTERVAL_MS),
        )
    }

    /// Creates the service with custom warmup limits and interval.
    pub fn with_limits(limits: GrowthLimits, interval: Duration) -> Self {
        let warmup = Arc::new(RwLock::new(GrowthBuffer::new(limits)));
        spawn_warmup_task(warmup.clone(), interval);

        Self { warmup }
    }

    // == Get Data ==
    /// Returns the fixed greeting.
    pub fn get_data(&self) -> DataResponse {
        DataResponse::new(GREETING)
    }

    /// Number of entries the warmup has appended so far.
    pub async fn warmup_len(&self) -> usize {
        self.warmup.read().await.len()
    }
}

impl Default for DataService {
    fn default() -> Self {
        Self::new()
    }
}
