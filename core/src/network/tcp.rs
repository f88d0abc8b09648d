use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use scanvenger_common::error::ProbeError;
use scanvenger_common::network::probe::ProbeOutcome;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// Races a TCP connect against `probe_timeout`.
///
/// The stream is dropped before returning, whichever side wins.
pub async fn connect_probe(addr: Ipv4Addr, port: u16, probe_timeout: Duration) -> ProbeOutcome<()> {
    let socket_addr: SocketAddr = SocketAddr::new(IpAddr::V4(addr), port);

    let result: Result<(), ProbeError> = match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(_stream)) => Ok(()),
        Ok(Err(e)) => Err(ProbeError::Connection(e)),
        Err(_elapsed) => Err(ProbeError::Timeout(probe_timeout)),
    };

    if let Err(e) = &result {
        trace!(%socket_addr, "closed: {e}");
    }
    ProbeOutcome::from(result)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
