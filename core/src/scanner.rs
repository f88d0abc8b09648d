//! The probing engine.
//!
//! A run is described by a [`ScanContext`]: the probe layer, the run-wide
//! [`ConcurrencyLimiter`] and the [`ResultAggregator`] every host task
//! appends to. [`run`] fans the target's hosts out through
//! [`subnet::sweep`] (a single host is a sweep of one) and drains the
//! aggregator once everything has joined.
//!
//! No probe failure ever surfaces here: the [`Prober`] contract converts them
//! into negative outcomes, so a run always completes.

use std::future::Future;
use std::net::Ipv4Addr;
use std::sync::Arc;

use scanvenger_common::config::{Config, LimiterScope};
use scanvenger_common::network::host::HostResult;
use scanvenger_common::network::probe::ProbeOutcome;
use scanvenger_common::network::range::HostOrder;
use scanvenger_common::network::target::Target;
use scanvenger_common::ports;
use tracing::{info, warn};

use crate::aggregator::ResultAggregator;
use crate::limiter::ConcurrencyLimiter;
use crate::network::{NetProber, Prober};

pub mod host;
pub mod subnet;

pub const DISCOVERY_REPORT: &str = "host-discovery.txt";

/// Called with `(hosts finished, hosts total)` after each host task joins.
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Liveness only. Every reachable host is reported.
    Discovery,
    /// Liveness, then a connect probe per port. Hosts without open ports are dropped.
    Ports(Arc<[u16]>),
}

impl ScanMode {
    pub fn ports(ports: &[u16]) -> Self {
        ScanMode::Ports(Arc::from(ports))
    }

    /// Default report file name for this mode.
    pub fn report_file_name(&self) -> String {
        match self {
            ScanMode::Discovery => DISCOVERY_REPORT.to_string(),
            ScanMode::Ports(ports) => ports::report_file_name(ports),
        }
    }
}

/// Shared state of one run. Cloning is cheap and shares everything.
#[derive(Clone)]
pub struct ScanContext {
    prober: Arc<dyn Prober>,
    limiter: ConcurrencyLimiter,
    results: Arc<ResultAggregator>,
    scope: LimiterScope,
    order: HostOrder,
}

impl ScanContext {
    pub fn new(prober: Arc<dyn Prober>, cfg: &Config) -> Self {
        Self::with_limiter(prober, ConcurrencyLimiter::new(cfg.concurrency))
            .with_scope(cfg.limiter_scope)
            .with_order(cfg.host_order)
    }

    /// A context with default scope and order around an existing limiter.
    pub fn with_limiter(prober: Arc<dyn Prober>, limiter: ConcurrencyLimiter) -> Self {
        Self {
            prober,
            limiter,
            results: Arc::new(ResultAggregator::new()),
            scope: LimiterScope::default(),
            order: HostOrder::default(),
        }
    }

    pub fn with_scope(mut self, scope: LimiterScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_order(mut self, order: HostOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limiter(&self) -> &ConcurrencyLimiter {
        &self.limiter
    }

    pub fn results(&self) -> &ResultAggregator {
        &self.results
    }

    pub fn order(&self) -> HostOrder {
        self.order
    }

    pub(crate) async fn liveness(&self, addr: Ipv4Addr) -> ProbeOutcome<u8> {
        let probe = self.prober.liveness(addr);
        self.gated(self.gates_everything(), probe, ProbeOutcome::Failure).await
    }

    pub(crate) async fn connect(&self, addr: Ipv4Addr, port: u16) -> ProbeOutcome<()> {
        let probe = self.prober.connect(addr, port);
        self.gated(true, probe, ProbeOutcome::Failure).await
    }

    pub(crate) async fn resolve(&self, addr: Ipv4Addr) -> String {
        let lookup = self.prober.resolve(addr);
        self.gated(self.gates_everything(), lookup, addr.to_string()).await
    }

    fn gates_everything(&self) -> bool {
        self.scope == LimiterScope::AllProbes
    }

    /// Runs `probe` while holding a limiter slot if `gate` is set.
    async fn gated<F, T>(&self, gate: bool, probe: F, fallback: T) -> T
    where
        F: Future<Output = T>,
    {
        if !gate {
            return probe.await;
        }

        match self.limiter.acquire().await {
            Ok(_slot) => probe.await,
            Err(e) => {
                warn!("Concurrency limiter unavailable: {e}");
                fallback
            }
        }
    }
}

/// Executes one run against `target` and returns every qualifying host.
///
/// Results come back in completion order; sorting is up to the caller.
pub async fn run(
    ctx: &ScanContext,
    target: Target,
    mode: ScanMode,
    on_progress: Option<ProgressCallback>,
) -> Vec<HostResult> {
    subnet::sweep(ctx, target, mode, on_progress).await;

    let results = ctx.results.drain();
    info!(
        hosts = results.len(),
        peak_in_flight = ctx.limiter.peak(),
        "Run against {target} finished"
    );
    results
}

/// Builds a [`NetProber`] and a fresh context from `cfg`, then executes one run.
pub async fn perform_scan(
    target: Target,
    mode: ScanMode,
    cfg: &Config,
    on_progress: Option<ProgressCallback>,
) -> Vec<HostResult> {
    let prober: Arc<dyn Prober> = Arc::new(NetProber::new(cfg));
    let ctx = ScanContext::new(prober, cfg);
    run(&ctx, target, mode, on_progress).await
}
