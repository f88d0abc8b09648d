use std::path::PathBuf;
use std::time::Duration;

use crate::network::range::HostOrder;

/// Ceiling on simultaneously in-flight probes for one run.
pub const DEFAULT_CONCURRENCY: usize = 50;

/// Budget for a single ICMP echo.
pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_millis(1_000);

/// Budget for a single TCP connect.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(2_000);

/// Which probes have to take a slot from the concurrency limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimiterScope {
    /// Only TCP port probes are gated. Liveness probes and reverse lookups
    /// run unbounded.
    #[default]
    PortProbes,
    /// Every network operation (echo, connect, reverse lookup) is gated.
    AllProbes,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Skips reverse DNS; hosts are named by their literal address.
    pub no_dns: bool,
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers, 2 also drops the host tree.
    pub quiet: u8,
    pub concurrency: usize,
    pub ping_timeout: Duration,
    pub connect_timeout: Duration,
    pub host_order: HostOrder,
    pub limiter_scope: LimiterScope,
    /// Overrides the report file name derived from the scan mode.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_dns: false,
            no_banner: false,
            quiet: 0,
            concurrency: DEFAULT_CONCURRENCY,
            ping_timeout: DEFAULT_PING_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            host_order: HostOrder::default(),
            limiter_scope: LimiterScope::default(),
            output: None,
        }
    }
}
