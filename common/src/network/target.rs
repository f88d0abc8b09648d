//! # Scan Target Model
//!
//! Defines the possible inputs for a run:
//! * A single IPv4 address (host).
//! * A CIDR block (e.g., `192.168.1.0/24`), swept as 254 hosts.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use tracing::warn;

use crate::error::TargetError;
use crate::network::range::{self, HostOrder, Subnet};

const SWEEP_PREFIX: u8 = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Probe one specific host.
    Host { addr: Ipv4Addr },
    /// Sweep every host of a /24-equivalent network.
    Subnet { subnet: Subnet },
}

impl Target {
    /// Number of hosts a run against this target attempts.
    pub fn host_count(&self) -> usize {
        match self {
            Target::Host { .. } => 1,
            Target::Subnet { .. } => range::HOSTS_PER_SUBNET,
        }
    }

    /// Addresses a run dispatches, in dispatch order.
    pub fn addrs(&self, order: HostOrder) -> Vec<Ipv4Addr> {
        match self {
            Target::Host { addr } => vec![*addr],
            Target::Subnet { subnet } => subnet.ordered_hosts(order),
        }
    }
}

impl FromStr for Target {
    type Err = TargetError;

    /// Parses a string into a `Target`.
    ///
    /// Supported formats:
    /// * **Host**: single IPv4 address (e.g. "192.168.1.5").
    /// * **CIDR**: "Network/Prefix" (e.g. "192.168.1.0/24").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TargetError::Empty);
        }

        if let Some(target) = parse_cidr(s)? {
            return Ok(target);
        }

        parse_host(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Host { addr } => write!(f, "{addr}"),
            Target::Subnet { subnet } => write!(f, "{subnet}"),
        }
    }
}

fn parse_host(s: &str) -> Result<Target, TargetError> {
    match s.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => Ok(Target::Host { addr }),
        Ok(IpAddr::V6(_)) => Err(TargetError::Ipv6(s.to_string())),
        Err(_) => Err(TargetError::InvalidAddress(s.to_string())),
    }
}

/// Parses CIDR notation like "192.168.1.0/24".
fn parse_cidr(s: &str) -> Result<Option<Target>, TargetError> {
    let Some((ip_str, prefix_str)) = s.split_once('/') else {
        return Ok(None);
    };

    if ip_str.parse::<std::net::Ipv6Addr>().is_ok() {
        return Err(TargetError::Ipv6(s.to_string()));
    }

    let ip = ip_str
        .parse::<Ipv4Addr>()
        .map_err(|_| TargetError::InvalidAddress(ip_str.to_string()))?;

    let prefix = prefix_str
        .parse::<u8>()
        .map_err(|_| TargetError::InvalidPrefix(s.to_string()))?;

    let subnet =
        range::cidr_subnet(ip, prefix).map_err(|_| TargetError::InvalidPrefix(s.to_string()))?;

    if prefix != SWEEP_PREFIX {
        warn!("Only /24 sweeps are supported, scanning {subnet} for {s}");
    }

    Ok(Some(Target::Subnet { subnet }))
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

    #[test]
    fn test_from_str_full_parsing() {
        assert_eq!(
            Target::from_str("10.0.0.5"),
            Ok(Target::Host { addr: Ipv4Addr::new(10, 0, 0, 5) })
        );
        assert_eq!(
            Target::from_str(" 192.168.1.0/24 "),
            Ok(Target::Subnet { subnet: Subnet::new(192, 168, 1) })
        );

        // Any valid prefix sweeps the /24 of the given address
        assert_eq!(
            Target::from_str("10.20.30.0/16"),
            Ok(Target::Subnet { subnet: Subnet::new(10, 20, 30) })
        );

        assert_eq!(Target::from_str(""), Err(TargetError::Empty));
        assert!(matches!(Target::from_str("::1"), Err(TargetError::Ipv6(_))));
        assert!(matches!(Target::from_str("fe80::/64"), Err(TargetError::Ipv6(_))));
        assert!(matches!(
            Target::from_str("not-an-ip"),
            Err(TargetError::InvalidAddress(_))
        ));
        assert!(matches!(
            Target::from_str("10.0.0.0/33"),
            Err(TargetError::InvalidPrefix(_))
        ));
        assert!(matches!(
            Target::from_str("10.0.0.0/x"),
            Err(TargetError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn target_sizes() {
        let host: Target = "10.0.0.1".parse().unwrap();
        let subnet: Target = "10.0.0.0/24".parse().unwrap();

        assert_eq!(host.host_count(), 1);
        assert_eq!(host.addrs(HostOrder::Lexical), vec![Ipv4Addr::new(10, 0, 0, 1)]);
        assert_eq!(subnet.host_count(), 254);
        assert_eq!(subnet.addrs(HostOrder::Numeric).len(), 254);
        assert_eq!(subnet.to_string(), "10.0.0.0/24");
    }
}
