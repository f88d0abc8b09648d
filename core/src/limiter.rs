//! Run-wide cap on in-flight probes.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};

#[derive(Debug, Default)]
struct Gauge {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

/// A counting semaphore shared by every probe of one run.
///
/// Cloning shares the same slots. Capacity is fixed at construction.
#[derive(Debug, Clone)]
pub struct ConcurrencyLimiter {
    semaphore: Arc<Semaphore>,
    capacity: usize,
    gauge: Arc<Gauge>,
}

/// A held slot. Dropping it gives the slot back.
#[derive(Debug)]
pub struct LimiterPermit {
    _permit: OwnedSemaphorePermit,
    gauge: Arc<Gauge>,
}

impl ConcurrencyLimiter {
    /// A limiter with `capacity` slots (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
            gauge: Arc::new(Gauge::default()),
        }
    }

    /// Waits for a free slot.
    ///
    /// Only fails if the semaphore was closed, which this type never does.
    pub async fn acquire(&self) -> Result<LimiterPermit, AcquireError> {
        let permit = Arc::clone(&self.semaphore).acquire_owned().await?;
        let now = self.gauge.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.gauge.peak.fetch_max(now, Ordering::SeqCst);

        Ok(LimiterPermit {
            _permit: permit,
            gauge: Arc::clone(&self.gauge),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_flight(&self) -> usize {
        self.gauge.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of slots held at the same time so far.
    pub fn peak(&self) -> usize {
        self.gauge.peak.load(Ordering::SeqCst)
    }
}

impl Drop for LimiterPermit {
    fn drop(&mut self) {
        // Runs before `_permit` is released, so the gauge never overshoots.
        self.gauge.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::task::JoinSet;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn peak_never_exceeds_capacity() {
        let limiter = ConcurrencyLimiter::new(5);
        let mut tasks = JoinSet::new();

        for _ in 0..100 {
            let limiter = limiter.clone();
            tasks.spawn(async move {
                let _slot = limiter.acquire().await.unwrap();
                tokio::time::sleep(Duration::from_millis(2)).await;
            });
        }
        while tasks.join_next().await.is_some() {}

        assert!(limiter.peak() <= 5, "peak was {}", limiter.peak());
        assert!(limiter.peak() >= 1);
        assert_eq!(limiter.in_flight(), 0);
    }

    #[tokio::test]
    async fn slots_come_back_on_drop() {
        let limiter = ConcurrencyLimiter::new(1);

        let slot = limiter.acquire().await.unwrap();
        assert_eq!(limiter.in_flight(), 1);
        drop(slot);

        let again = tokio::time::timeout(Duration::from_millis(100), limiter.acquire()).await;
        assert!(again.is_ok(), "slot was not released");
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        assert_eq!(ConcurrencyLimiter::new(0).capacity(), 1);
    }
}
