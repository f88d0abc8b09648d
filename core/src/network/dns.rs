use std::net::{IpAddr, Ipv4Addr};

use scanvenger_common::error::ResolveError;
use tracing::debug;

/// Reverse lookup through the system resolver.
///
/// `lookup_addr` blocks, so it runs on the blocking pool.
pub async fn reverse_lookup(addr: Ipv4Addr) -> Result<String, ResolveError> {
    let ip = IpAddr::V4(addr);
    tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&ip))
        .await
        .map_err(|e| ResolveError::Aborted(e.to_string()))?
        .map_err(|e| ResolveError::Lookup {
            addr: ip,
            reason: e.to_string(),
        })
}

/// Resolved name of `addr`, or the literal address if the lookup fails.
pub async fn resolve_name(addr: Ipv4Addr) -> String {
    name_or_addr(addr, reverse_lookup(addr).await)
}

/// An empty or failed lookup names the host by its address.
fn name_or_addr(addr: Ipv4Addr, lookup: Result<String, ResolveError>) -> String {
    match lookup {
        Ok(name) if !name.is_empty() => name,
        Ok(_) => addr.to_string(),
        Err(e) => {
            debug!("{e}");
            addr.to_string()
        }
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

    const ADDR: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 5);

    #[test]
    fn resolved_name_is_kept() {
        assert_eq!(name_or_addr(ADDR, Ok("db.corp.local".into())), "db.corp.local");
    }

    #[test]
    fn failed_lookup_falls_back_to_address() {
        let failed = Err(ResolveError::Lookup {
            addr: IpAddr::V4(ADDR),
            reason: "no PTR record".into(),
        });
        assert_eq!(name_or_addr(ADDR, failed), "10.0.0.5");

        let aborted = Err(ResolveError::Aborted("cancelled".into()));
        assert_eq!(name_or_addr(ADDR, aborted), "10.0.0.5");
    }

    #[test]
    fn empty_name_falls_back_to_address() {
        assert_eq!(name_or_addr(ADDR, Ok(String::new())), "10.0.0.5");
    }

    #[tokio::test]
    async fn resolve_name_never_comes_back_empty() {
        let name = resolve_name(Ipv4Addr::LOCALHOST).await;
        assert!(!name.is_empty());
    }
}
