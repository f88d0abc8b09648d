use std::collections::BTreeSet;
use std::fmt;
use std::net::Ipv4Addr;

/// Domain label used for hostnames without a dot.
pub const UNKNOWN_DOMAIN: &str = "Unknown";

/// Operating system family guessed from a liveness reply.
///
/// Computed once per host from exactly one echo and never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsGuess {
    Linux,
    Windows,
    /// Alive, but the hop count matched neither family.
    Unknown(u8),
    Unreachable,
}

impl OsGuess {
    pub fn is_reachable(&self) -> bool {
        !matches!(self, OsGuess::Unreachable)
    }
}

impl fmt::Display for OsGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsGuess::Linux => f.write_str("Linux"),
            OsGuess::Windows => f.write_str("Windows"),
            OsGuess::Unknown(ttl) => write!(f, "Unknown (TTL: {ttl})"),
            OsGuess::Unreachable => f.write_str("Host Unreachable"),
        }
    }
}

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResult {
    pub addr: Ipv4Addr,
    /// Sorted ascending, no duplicates. Empty in discovery mode.
    pub open_ports: Vec<u16>,
    /// Reverse DNS name, or the literal address when the lookup failed.
    pub hostname: String,
    pub os: OsGuess,
}

impl HostResult {
    pub fn new(addr: Ipv4Addr, hostname: String, os: OsGuess) -> Self {
        Self {
            addr,
            open_ports: Vec::new(),
            hostname,
            os,
        }
    }

    pub fn with_ports<I>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        let ports: BTreeSet<u16> = ports.into_iter().collect();
        self.open_ports = ports.into_iter().collect();
        self
    }

    /// Everything after the first dot of the hostname, or [`UNKNOWN_DOMAIN`].
    pub fn domain(&self) -> &str {
        domain_of(&self.hostname)
    }
}

pub fn domain_of(hostname: &str) -> &str {
    hostname
        .split_once('.')
        .map_or(UNKNOWN_DOMAIN, |(_, domain)| domain)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
