//! Append-only collection of per-host results, shared by all host tasks.

use std::sync::{Mutex, MutexGuard, PoisonError};

use scanvenger_common::network::host::HostResult;
use tracing::warn;

#[derive(Debug, Default)]
pub struct ResultAggregator {
    results: Mutex<Vec<HostResult>>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `result` unless its address is already present.
    ///
    /// Returns whether the result was stored.
    pub fn push(&self, result: HostResult) -> bool {
        let mut results = self.lock();
        if results.iter().any(|existing| existing.addr == result.addr) {
            warn!("Dropping duplicate result for {}", result.addr);
            return false;
        }
        results.push(result);
        true
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Takes every stored result, in insertion order.
    ///
    /// Meant to be called once, after all writers have been joined.
    pub fn drain(&self) -> Vec<HostResult> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<HostResult>> {
        // A writer that panicked mid-push cannot leave the Vec half-written.
        self.results.lock().unwrap_or_else(PoisonError::into_inner)
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
    use scanvenger_common::network::host::OsGuess;
    use std::collections::HashSet;
    use std::net::Ipv4Addr;
    use std::sync::Arc;
    use tokio::task::JoinSet;

    fn result(last: u8) -> HostResult {
        let addr = Ipv4Addr::new(192, 168, 1, last);
        HostResult::new(addr, addr.to_string(), OsGuess::Linux)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_appends_are_all_kept() {
        let aggregator = Arc::new(ResultAggregator::new());
        let mut tasks = JoinSet::new();

        for last in 1..=254u8 {
            let aggregator = Arc::clone(&aggregator);
            tasks.spawn(async move { aggregator.push(result(last)) });
        }
        while let Some(stored) = tasks.join_next().await {
            assert!(stored.unwrap());
        }

        let results = aggregator.drain();
        let distinct: HashSet<Ipv4Addr> = results.iter().map(|r| r.addr).collect();
        assert_eq!(results.len(), 254);
        assert_eq!(distinct.len(), 254);
        assert!(aggregator.is_empty());
    }

    #[test]
    fn duplicate_addresses_are_rejected() {
        let aggregator = ResultAggregator::new();
        assert!(aggregator.push(result(7)));
        assert!(!aggregator.push(result(7).with_ports([22])));
        assert_eq!(aggregator.len(), 1);
        assert!(aggregator.drain()[0].open_ports.is_empty());
    }
}
