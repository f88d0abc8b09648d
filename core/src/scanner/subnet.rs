//! Target fan-out: one independent task per host, joined before returning.
//!
//! Host tasks are not capped; each of them contends for the run's
//! [`ConcurrencyLimiter`](crate::limiter::ConcurrencyLimiter) once it starts
//! probing.

use std::net::Ipv4Addr;

use scanvenger_common::network::target::Target;
use tokio::task::JoinSet;
use tracing::{info, warn};

use super::{ProgressCallback, ScanContext, ScanMode, host};

pub async fn sweep(
    ctx: &ScanContext,
    target: Target,
    mode: ScanMode,
    on_progress: Option<ProgressCallback>,
) {
    let addrs: Vec<Ipv4Addr> = target.addrs(ctx.order());
    let total: usize = addrs.len();
    info!("Sweeping {total} hosts in {target}");

    let mut hosts: JoinSet<bool> = JoinSet::new();
    for addr in addrs {
        let ctx = ctx.clone();
        let mode = mode.clone();
        hosts.spawn(async move { host::scan(&ctx, addr, &mode).await });
    }

    let mut finished: usize = 0;
    let mut reported: usize = 0;
    while let Some(joined) = hosts.join_next().await {
        finished += 1;
        match joined {
            Ok(true) => reported += 1,
            Ok(false) => {}
            Err(e) => warn!("Host task in {target} did not complete: {e}"),
        }
        if let Some(report) = &on_progress {
            report(finished, total);
        }
    }

    info!("{reported} of {total} hosts in {target} qualified");
}
