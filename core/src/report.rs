//! Fixed-width text report.
//!
//! Rows are grouped by domain (text after the first dot of the hostname),
//! groups are ordered by domain and rows inside a group by hostname.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use scanvenger_common::network::host::HostResult;

const IP_WIDTH: usize = 20;
const HOSTNAME_WIDTH: usize = 30;
const OS_WIDTH: usize = 20;
const PORTS_WIDTH: usize = 40;

/// Groups `results` by domain, each group sorted by hostname.
pub fn group_by_domain(results: &[HostResult]) -> BTreeMap<&str, Vec<&HostResult>> {
    let mut groups: BTreeMap<&str, Vec<&HostResult>> = BTreeMap::new();
    for result in results {
        groups.entry(result.domain()).or_default().push(result);
    }
    for rows in groups.values_mut() {
        rows.sort_by(|a, b| a.hostname.cmp(&b.hostname));
    }
    groups
}

pub fn render(results: &[HostResult]) -> String {
    let header: String = row("IP Address", "Hostname", "Operating System", "Open Ports");
    let separator: String = "-".repeat(header.chars().count());

    let mut lines: Vec<String> = vec![separator.clone(), header, separator.clone()];
    for rows in group_by_domain(results).into_values() {
        for result in rows {
            let ports: Vec<String> = result.open_ports.iter().map(u16::to_string).collect();
            lines.push(row(
                &result.addr.to_string(),
                &result.hostname,
                &result.os.to_string(),
                &ports.join(", "),
            ));
        }
    }
    lines.push(separator);

    let mut out: String = lines.join("\n");
    out.push('\n');
    out
}

/// Renders `results` and writes them to `path`, replacing any existing file.
pub async fn write(results: &[HostResult], path: &Path) -> anyhow::Result<()> {
    tokio::fs::write(path, render(results))
        .await
        .with_context(|| format!("writing report to {}", path.display()))
}

fn row(ip: &str, hostname: &str, os: &str, ports: &str) -> String {
    format!("{ip:<IP_WIDTH$} | {hostname:<HOSTNAME_WIDTH$} | {os:<OS_WIDTH$} | {ports:<PORTS_WIDTH$}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
