//! Warmup Module
//!
//! Response cache warmup: an append-only buffer of filler records that grows
//! on every tick until its estimated size reaches the configured limit.

mod buffer;


// Re-export public types
pub use buffer::{FillerRecord, GrowthBuffer, GrowthLimits};

// == Public Constants ==
/// Size limit the estimated buffer size is compared against (300 MB)
pub const MAX_CACHE_SIZE: usize = 300 * 1024 * 1024;

/// Nominal size of one buffer entry used for the estimate (1 MB)
pub const CACHE_ENTRY_SIZE: usize = 1024 * 1024;

/// String repeated inside every filler record
pub const FILLER_CHUNK: &str = "xxxxxxxx";

/// Interval between warmup ticks in milliseconds
pub const WARMUP_INTERVAL_MS: u64 = 100;
