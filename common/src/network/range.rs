use std::fmt;
use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

/// Usable host addresses in a /24-equivalent sweep (last octet 1..=254).
pub const HOSTS_PER_SUBNET: usize = 254;

/// Order in which a subnet sweep dispatches its host tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostOrder {
    /// Sorted as strings of the full address: `.1`, `.10`, `.100`, `.101`, ..., `.2`.
    /// Matches the row order of historical reports.
    #[default]
    Lexical,
    /// Ascending last octet.
    Numeric,
}

/// A /24-equivalent network, identified by its first three octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    prefix: [u8; 3],
}

impl Subnet {
    pub fn new(a: u8, b: u8, c: u8) -> Self {
        Self { prefix: [a, b, c] }
    }

    /// The subnet obtained by replacing the last octet of `addr`.
    pub fn containing(addr: Ipv4Addr) -> Self {
        let [a, b, c, _] = addr.octets();
        Self::new(a, b, c)
    }

    /// Every host address, ascending by last octet.
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> + use<> {
        let [a, b, c] = self.prefix;
        (1..=HOSTS_PER_SUBNET as u8).map(move |d| Ipv4Addr::new(a, b, c, d))
    }

    pub fn ordered_hosts(&self, order: HostOrder) -> Vec<Ipv4Addr> {
        let mut hosts: Vec<Ipv4Addr> = self.hosts().collect();
        if order == HostOrder::Lexical {
            hosts.sort_by_cached_key(|addr| addr.to_string());
        }
        hosts
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.prefix;
        write!(f, "{a}.{b}.{c}.0/24")
    }
}

/// Validates `ip/prefix` and returns the /24 sweep for it.
///
/// Only the last octet is ever substituted, so any prefix length sweeps the
/// 254 neighbours of `ip`.
pub fn cidr_subnet(ip: Ipv4Addr, prefix: u8) -> anyhow::Result<Subnet> {
    let network = Ipv4Network::new(ip, prefix)?;
    Ok(Subnet::containing(network.ip()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
