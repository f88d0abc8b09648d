//! Interactive flow used when no subcommand is given.

use anyhow::{Context, bail, ensure};
use console::Term;
use scanvenger_common::{
    config::Config,
    network::target::Target,
    ports::{PortList, PortPreset},
};

use crate::commands::{discover, scan};
use crate::terminal::print;

pub async fn menu(cfg: &Config) -> anyhow::Result<()> {
    let term = Term::stdout();

    print::print("");
    print::print("Please choose an option:");
    print::print("");
    print::print("\t1. Host Discovery");
    print::print("\t2. Port Scanning");
    print::print("");

    let choice: String = prompt(&term, "Enter the number: ")?;
    match choice.as_str() {
        "1" => {
            let target = read_target(&term, "Subnet to scan for live hosts (e.g., 192.168.1.0/24): ")?;
            print::section("host discovery", cfg.quiet);
            discover::discover(target, cfg).await
        }
        "2" => {
            let target = read_target(&term, "Subnet to scan (e.g., 192.168.1.0/24): ")?;
            let ports = read_ports(&term)?;
            print::section("port scanning", cfg.quiet);
            scan::scan(target, ports, cfg).await
        }
        other => bail!("Invalid choice '{other}'. Please restart and choose either 1 or 2."),
    }
}

fn prompt(term: &Term, label: &str) -> anyhow::Result<String> {
    term.write_str(label).context("writing prompt")?;
    let line = term.read_line().context("reading input")?;
    Ok(line.trim().to_string())
}

fn read_target(term: &Term, label: &str) -> anyhow::Result<Target> {
    let raw: String = prompt(term, label)?;
    ensure!(!raw.is_empty(), "Invalid input. Please provide a valid subnet.");
    Ok(raw.parse::<Target>()?)
}

fn read_ports(term: &Term) -> anyhow::Result<PortList> {
    print::print("Choose the port set to scan:");
    print::print("");
    for (idx, preset) in PortPreset::ALL.iter().enumerate() {
        print::print(&format!("\t{}. {preset}", idx + 1));
    }
    print::print("\t4. Custom (Enter a list or range, e.g., 80,443,8080 or 1000-2000)");
    print::print("");

    let choice: String = prompt(term, "Enter your choice (1-4): ")?;
    let ports: PortList = match preset_choice(&choice) {
        Some(preset) => PortList::from(preset),
        None if choice == "4" => {
            let custom = prompt(term, "Enter your custom ports (e.g., 80,443,8080 or 1000-2000): ")?;
            PortList::parse(&custom)
        }
        None => bail!("Invalid choice '{choice}'."),
    };

    ensure!(
        !ports.is_empty(),
        "Invalid input. Please make sure to provide a valid subnet and ports."
    );
    Ok(ports)
}

/// Menu entries 1-3 map onto the presets in declaration order.
fn preset_choice(choice: &str) -> Option<PortPreset> {
    let idx: usize = choice.parse().ok()?;
    PortPreset::ALL.get(idx.checked_sub(1)?).copied()
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
    fn menu_numbers_select_presets() {
        assert_eq!(preset_choice("1"), Some(PortPreset::Web));
        assert_eq!(preset_choice("2"), Some(PortPreset::Admin));
        assert_eq!(preset_choice("3"), Some(PortPreset::Top20));
        assert_eq!(preset_choice("4"), None);
        assert_eq!(preset_choice("0"), None);
        assert_eq!(preset_choice("web"), None);
    }
}
