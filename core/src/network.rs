//! The probe layer.
//!
//! Scanners never touch sockets directly; they go through [`Prober`], which
//! turns every probe-level error into a negative [`ProbeOutcome`]. The
//! production implementation is [`NetProber`].

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use scanvenger_common::config::Config;
use scanvenger_common::network::probe::ProbeOutcome;
use surge_ping::Client;
use tracing::warn;

pub mod dns;
pub mod icmp;
pub mod tcp;

/// Defines the network operations a scan is built from.
///
/// Implementations must not fail: errors become [`ProbeOutcome::Failure`]
/// or [`ProbeOutcome::Timeout`], and name resolution falls back to the
/// literal address.
#[async_trait]
pub trait Prober: Send + Sync {
    /// One echo request. Success carries the reply's hop count (0 if absent).
    async fn liveness(&self, addr: Ipv4Addr) -> ProbeOutcome<u8>;

    /// One TCP connect attempt.
    async fn connect(&self, addr: Ipv4Addr, port: u16) -> ProbeOutcome<()>;

    /// Reverse DNS name of `addr`, or `addr` itself as a string.
    async fn resolve(&self, addr: Ipv4Addr) -> String;
}

/// [`Prober`] backed by real ICMP, TCP and the system resolver.
pub struct NetProber {
    echo: Option<Client>,
    ping_timeout: Duration,
    connect_timeout: Duration,
    no_dns: bool,
}

impl NetProber {
    /// Opens the shared ICMP socket. Must be called inside a tokio runtime.
    ///
    /// If the socket cannot be opened (missing privileges, no ICMP support)
    /// the prober still works, but every liveness probe fails.
    pub fn new(cfg: &Config) -> Self {
        let echo = match icmp::client() {
            Ok(client) => {
                if !icmp::ttl_available() {
                    warn!("No raw ICMP socket, replies carry no TTL and every live host will be guessed as Linux");
                }
                Some(client)
            }
            Err(e) => {
                warn!("ICMP unavailable ({e}), every host will be reported unreachable");
                None
            }
        };

        Self {
            echo,
            ping_timeout: cfg.ping_timeout,
            connect_timeout: cfg.connect_timeout,
            no_dns: cfg.no_dns,
        }
    }
}

#[async_trait]
impl Prober for NetProber {
    async fn liveness(&self, addr: Ipv4Addr) -> ProbeOutcome<u8> {
        match &self.echo {
            Some(client) => icmp::echo(client, addr, self.ping_timeout).await,
            None => ProbeOutcome::Failure,
        }
    }

    async fn connect(&self, addr: Ipv4Addr, port: u16) -> ProbeOutcome<()> {
        tcp::connect_probe(addr, port, self.connect_timeout).await
    }

    async fn resolve(&self, addr: Ipv4Addr) -> String {
        if self.no_dns {
            return addr.to_string();
        }
        dns::resolve_name(addr).await
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

    #[tokio::test]
    async fn no_dns_names_hosts_by_address() {
        let cfg = Config {
            no_dns: true,
            ..Config::default()
        };
        let prober = NetProber::new(&cfg);

        let addr = Ipv4Addr::new(127, 0, 0, 1);
        assert_eq!(prober.resolve(addr).await, "127.0.0.1");
    }

    #[tokio::test]
    async fn prober_takes_timeouts_from_config() {
        let cfg = Config {
            ping_timeout: Duration::from_millis(250),
            connect_timeout: Duration::from_millis(750),
            ..Config::default()
        };
        let prober = NetProber::new(&cfg);

        assert_eq!(prober.ping_timeout, Duration::from_millis(250));
        assert_eq!(prober.connect_timeout, Duration::from_millis(750));
        assert!(!prober.no_dns);
    }
}
