use colored::*;
use scanvenger_common::network::host::{HostResult, OsGuess};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn host_to_detail(result: &HostResult) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (String::from("IPv4"), result.addr.to_string().color(colors::IPV4_ADDR)),
        (String::from("OS"), os_to_colored(result.os)),
    ];

    if !result.open_ports.is_empty() {
        let ports: Vec<String> = result.open_ports.iter().map(u16::to_string).collect();
        details.push((String::from("Ports"), ports.join(", ").color(colors::PORT)));
    }

    details
}

fn os_to_colored(os: OsGuess) -> ColoredString {
    let color = match os {
        OsGuess::Linux => colors::OS_LINUX,
        OsGuess::Windows => colors::OS_WINDOWS,
        OsGuess::Unknown(_) | OsGuess::Unreachable => colors::OS_UNKNOWN,
    };
    os.to_string().color(color)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
