use anyhow::ensure;
use scanvenger_common::{config::Config, network::target::Target, ports::PortList};
use scanvenger_core::scanner::ScanMode;

use crate::commands::sweep;
use crate::terminal::print;

pub async fn scan(target: Target, ports: PortList, cfg: &Config) -> anyhow::Result<()> {
    ensure!(
        !ports.is_empty(),
        "Invalid input. Please make sure to provide a valid subnet and ports."
    );

    if cfg.quiet == 0 {
        print::param("Target", target);
        print::param("Ports", describe_ports(&ports));
        print::param("Concurrency", cfg.concurrency);
        print::param("Timeout", format!("{}ms", cfg.connect_timeout.as_millis()));
    }

    sweep::execute(target, ScanMode::ports(&ports), cfg).await
}

fn describe_ports(ports: &PortList) -> String {
    if let Some(preset) = ports.preset() {
        return preset.to_string();
    }
    match (ports.iter().min(), ports.iter().max()) {
        (Some(min), Some(max)) if ports.len() > 1 => format!("{} ports ({min}-{max})", ports.len()),
        (Some(port), _) => port.to_string(),
        _ => String::from("none"),
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

    #[test]
    fn port_descriptions() {
        assert_eq!(describe_ports(&PortList::parse("web")), "web (Ports: 80, 443, 3000, 8080, 8081, 8443)");
        assert_eq!(describe_ports(&PortList::parse("1000-1009")), "10 ports (1000-1009)");
        assert_eq!(describe_ports(&PortList::parse("22")), "22");
    }
}
