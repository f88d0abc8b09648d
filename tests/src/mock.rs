use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use scanvenger_common::network::probe::ProbeOutcome;
use scanvenger_core::limiter::ConcurrencyLimiter;
use scanvenger_core::network::Prober;
use scanvenger_core::scanner::ScanContext;

pub struct MockHost {
    pub hops: u8,
    pub open: Vec<u16>,
    pub hostname: Option<String>,
}

/// Scripted network: listed hosts answer the echo, everything else times out.
#[derive(Default)]
pub struct MockProber {
    hosts: HashMap<Ipv4Addr, MockHost>,
    connect_delay: Duration,
    connects: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl MockProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, addr: Ipv4Addr, hops: u8, open: &[u16]) -> Self {
        self.hosts.insert(addr, MockHost { hops, open: open.to_vec(), hostname: None });
        self
    }

    pub fn named_host(mut self, addr: Ipv4Addr, hops: u8, open: &[u16], name: &str) -> Self {
        self.hosts.insert(
            addr,
            MockHost { hops, open: open.to_vec(), hostname: Some(name.to_string()) },
        );
        self
    }

    pub fn connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = delay;
        self
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Highest number of connect probes observed running at once.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for MockProber {
    async fn liveness(&self, addr: Ipv4Addr) -> ProbeOutcome<u8> {
        match self.hosts.get(&addr) {
            Some(host) => ProbeOutcome::Success(host.hops),
            None => ProbeOutcome::Timeout,
        }
    }

    async fn connect(&self, addr: Ipv4Addr, port: u16) -> ProbeOutcome<()> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        if !self.connect_delay.is_zero() {
            tokio::time::sleep(self.connect_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.hosts.get(&addr) {
            Some(host) if host.open.contains(&port) => ProbeOutcome::Success(()),
            _ => ProbeOutcome::Failure,
        }
    }

    async fn resolve(&self, addr: Ipv4Addr) -> String {
        self.hosts
            .get(&addr)
            .and_then(|host| host.hostname.clone())
            .unwrap_or_else(|| addr.to_string())
    }
}

pub fn context(prober: &Arc<MockProber>, capacity: usize) -> ScanContext {
    let prober: Arc<dyn Prober> = Arc::clone(prober) as Arc<dyn Prober>;
    ScanContext::with_limiter(prober, ConcurrencyLimiter::new(capacity))
}
