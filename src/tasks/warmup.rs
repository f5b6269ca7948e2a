//! Cache Warmup Task
//!
//! Background task that grows the warmup buffer on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::warmup::GrowthBuffer;

/// Spawns the warmup task for `buffer`.
///
/// Ticks are scheduled on a fixed cadence starting one `interval` after this
/// call, so the time spent building a record does not shift later ticks. Each
/// tick runs one [`GrowthBuffer::tick`]. The task keeps ticking after the
/// buffer stops growing and only ends with the runtime.
///
/// # Arguments
/// * `buffer` - Arc<RwLock<GrowthBuffer>> the task appends to
/// * `interval` - Time between ticks
pub fn spawn_warmup_task(buffer: Arc<RwLock<GrowthBuffer>>, interval: Duration) -> JoinHandle<()> {
    // Anchored here, not on first poll of the task
    let mut ticker = interval_at(Instant::now() + interval, interval);

    tokio::spawn(async move {
        info!("Starting cache warmup task with interval of {:?}", interval);

        loop {
            ticker.tick().await;

            let (appended, len) = {
                let mut buffer_guard = buffer.write().await;
                let appended = buffer_guard.tick();
                (appended, buffer_guard.len())
            };

            if appended {
                debug!("Cache warmup: buffer holds {} entries", len);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warmup::GrowthLimits;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn shared_buffer(max_size: usize, entry_size: usize) -> Arc<RwLock<GrowthBuffer>> {
        Arc::new(RwLock::new(GrowthBuffer::new(GrowthLimits::new(
            max_size, entry_size,
        ))))
    }

    /// Moves the paused clock forward and lets the warmup task run.
    async fn advance(duration: Duration) {
        tokio::time::advance(duration).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_warmup_task_appends_once_per_interval() {
        let limit = 5;
        let buffer = shared_buffer(limit * 64, 64);

        let handle = spawn_warmup_task(buffer.clone(), INTERVAL);

        for k in 1..=limit + 2 {
            advance(INTERVAL).await;
            assert_eq!(buffer.read().await.len(), k.min(limit), "after tick {}", k);
        }

        assert!(!handle.is_finished(), "Task should keep running");
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_warmup_task_waits_one_interval() {
        let buffer = shared_buffer(5 * 64, 64);

        let handle = spawn_warmup_task(buffer.clone(), INTERVAL);

        advance(INTERVAL - Duration::from_millis(1)).await;
        assert!(buffer.read().await.is_empty());

        advance(Duration::from_millis(1)).await;
        assert_eq!(buffer.read().await.len(), 1);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_warmup_task_keeps_fixed_cadence() {
        let buffer = shared_buffer(100 * 64, 64);

        let handle = spawn_warmup_task(buffer.clone(), INTERVAL);

        // Half-interval steps: one append every second step
        for step in 1..=20usize {
            advance(INTERVAL / 2).await;
            assert_eq!(buffer.read().await.len(), step / 2, "after step {}", step);
        }

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_warmup_task_length_never_decreases() {
        let buffer = shared_buffer(20 * 64, 64);

        let handle = spawn_warmup_task(buffer.clone(), INTERVAL);

        let mut previous = 0;
        for _ in 0..30 {
            advance(INTERVAL).await;
            let len = buffer.read().await.len();
            assert!(len >= previous);
            previous = len;
        }
        assert_eq!(previous, 20);

        handle.abort();
    }
}
