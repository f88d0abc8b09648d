//! Per-host scanners: discovery (liveness only) and port scan.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::sync::Arc;

use scanvenger_common::network::host::HostResult;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::{ScanContext, ScanMode};
use crate::fingerprint;

pub async fn scan(ctx: &ScanContext, addr: Ipv4Addr, mode: &ScanMode) -> bool {
    match mode {
        ScanMode::Discovery => discover(ctx, addr).await,
        ScanMode::Ports(ports) => scan_ports(ctx, addr, Arc::clone(ports)).await,
    }
}

/// Reports `addr` if it answers the echo. Returns whether a result was stored.
pub async fn discover(ctx: &ScanContext, addr: Ipv4Addr) -> bool {
    let os = fingerprint::guess(&ctx.liveness(addr).await);
    if !os.is_reachable() {
        return false;
    }

    let hostname = ctx.resolve(addr).await;
    debug!(%addr, %hostname, %os, "host is up");
    ctx.results.push(HostResult::new(addr, hostname, os))
}

/// Probes every port of a live host concurrently and reports the open ones.
///
/// Unreachable hosts are skipped before any port is touched. A host whose
/// open set is empty, before or after the OS filter, is not reported.
pub async fn scan_ports(ctx: &ScanContext, addr: Ipv4Addr, ports: Arc<[u16]>) -> bool {
    let os = fingerprint::guess(&ctx.liveness(addr).await);
    if !os.is_reachable() {
        return false;
    }

    let mut probes: JoinSet<Option<u16>> = JoinSet::new();
    for &port in ports.iter() {
        let ctx = ctx.clone();
        probes.spawn(async move { ctx.connect(addr, port).await.is_success().then_some(port) });
    }

    let mut open: BTreeSet<u16> = BTreeSet::new();
    while let Some(joined) = probes.join_next().await {
        match joined {
            Ok(Some(port)) => {
                open.insert(port);
            }
            Ok(None) => {}
            Err(e) => warn!("Port probe on {addr} did not complete: {e}"),
        }
    }

    if open.is_empty() {
        debug!(%addr, %os, "up, no open ports");
        return false;
    }

    let hostname = ctx.resolve(addr).await;
    let open = fingerprint::retain_plausible(os, open);
    if open.is_empty() {
        debug!(%addr, %os, "only implausible ports were open");
        return false;
    }

    debug!(%addr, %hostname, ?open, "open ports");
    ctx.results.push(HostResult::new(addr, hostname, os).with_ports(open))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
