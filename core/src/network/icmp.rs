//! ICMP echo liveness probe.
//!
//! The reply's TTL is the only metadata kept; it feeds the OS fingerprint.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use scanvenger_common::error::ProbeError;
use scanvenger_common::network::probe::ProbeOutcome;
use socket2::{Domain, Protocol, Socket, Type};
use surge_ping::{Client, Config, ICMP, IcmpPacket, PingIdentifier, PingSequence, SurgeError};
use tracing::debug;

const PAYLOAD: [u8; 56] = [0; 56];

/// Socket kind requested from the OS. Only raw sockets hand back the IP
/// header, and with it the reply TTL.
const SOCKET_KIND: Type = Type::RAW;

fn client_config() -> Config {
    Config::builder().kind(ICMP::V4).sock_type_hint(SOCKET_KIND).build()
}

/// Opens the ICMPv4 socket shared by every echo of a run.
///
/// Asks for a raw socket; surge-ping falls back to a datagram socket when
/// raw ones are refused, in which case replies carry no TTL.
pub fn client() -> Result<Client, ProbeError> {
    Client::new(&client_config()).map_err(|e| ProbeError::Icmp(e.to_string()))
}

/// Whether this process may open a raw ICMPv4 socket, i.e. whether
/// [`client`] will see reply TTLs.
pub fn ttl_available() -> bool {
    Socket::new(Domain::IPV4, SOCKET_KIND, Some(Protocol::ICMPV4)).is_ok()
}

/// Sends one echo request and waits at most `probe_timeout` for the reply.
pub async fn echo(client: &Client, addr: Ipv4Addr, probe_timeout: Duration) -> ProbeOutcome<u8> {
    let result = send_echo(client, addr, probe_timeout).await;
    match &result {
        Ok(ttl) => debug!(%addr, ttl, "echo reply"),
        Err(e) => debug!(%addr, "no echo reply: {e}"),
    }
    ProbeOutcome::from(result)
}

async fn send_echo(client: &Client, addr: Ipv4Addr, probe_timeout: Duration) -> Result<u8, ProbeError> {
    let mut pinger = client
        .pinger(IpAddr::V4(addr), PingIdentifier(rand::random()))
        .await;
    pinger.timeout(probe_timeout);

    match pinger.ping(PingSequence(0), &PAYLOAD).await {
        Ok((IcmpPacket::V4(packet), _rtt)) => Ok(packet.get_ttl().unwrap_or_else(|| {
            debug!(%addr, "echo reply without TTL");
            0
        })),
        Ok((IcmpPacket::V6(_), _rtt)) => Ok(0),
        Err(SurgeError::Timeout { .. }) => Err(ProbeError::Timeout(probe_timeout)),
        Err(e) => Err(ProbeError::Icmp(e.to_string())),
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
