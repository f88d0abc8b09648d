//! Line-oriented terminal output.
//!
//! Every line goes through the `scanvenger::print` log target so that it is
//! written above the sweep spinner instead of through it. The `*_line`
//! builders are pure and return what the printing wrappers emit.

use std::fmt::Display;

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::format::Detail;
use crate::terminal::{banner, colors};

/// Visible width of rules, section lines and centred text.
pub const TOTAL_WIDTH: usize = 64;
const PARAM_KEY_WIDTH: usize = 14;
const DETAIL_KEY_WIDTH: usize = 6;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("")
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg)
    };
}

pub fn print(msg: &str) {
    info!(target: "scanvenger::print", raw_msg = msg);
}

pub fn banner(no_banner: bool, quiet: u8) {
    if no_banner || quiet > 0 {
        return;
    }
    banner::print();
    let tagline = format!("v{} :: live hosts, OS guesses, open ports", env!("CARGO_PKG_VERSION"));
    print(&centered_line(&tagline.color(colors::SEPARATOR)));
    rule();
}

/// `── TITLE ─────…`, padded with rule characters up to [`TOTAL_WIDTH`].
pub fn section_line(title: &str) -> String {
    let label = format!(" {} ", title.to_uppercase());
    let tail = TOTAL_WIDTH.saturating_sub(label.width() + 2);
    format!(
        "{}{}{}",
        "──".color(colors::SEPARATOR),
        label.color(colors::PRIMARY).bold(),
        "─".repeat(tail).color(colors::SEPARATOR)
    )
}

pub fn section(title: &str, quiet: u8) {
    if quiet == 0 {
        print(&section_line(title));
    }
}

/// One run parameter, key dot-padded to a fixed column.
pub fn param_line(key: &str, value: impl Display) -> String {
    let dots = ".".repeat(PARAM_KEY_WIDTH.saturating_sub(key.len()));
    format!(
        "  {} {} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        value.to_string().color(colors::TEXT_DEFAULT)
    )
}

pub fn param(key: &str, value: impl Display) {
    print(&param_line(key, value));
}

/// A numbered host heading followed by its details as tree branches.
pub fn host_lines(idx: usize, name: &str, details: &[Detail]) -> Vec<String> {
    let mut lines = Vec::with_capacity(details.len() + 1);
    lines.push(format!(
        "{}{}{} {}",
        "#".color(colors::SEPARATOR),
        (idx + 1).to_string().color(colors::ACCENT),
        ":".color(colors::SEPARATOR),
        name.color(colors::PRIMARY).bold()
    ));

    for (i, (key, value)) in details.iter().enumerate() {
        let branch = if i + 1 == details.len() { "└─" } else { "├─" };
        let key = format!("{key:<DETAIL_KEY_WIDTH$}");
        lines.push(format!(
            "   {} {} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            value
        ));
    }
    lines
}

pub fn host(idx: usize, name: &str, details: &[Detail]) {
    for line in host_lines(idx, name, details) {
        print(&line);
    }
}

pub fn centered_line(msg: &dyn Display) -> String {
    let msg = msg.to_string();
    let pad = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(&msg)) / 2);
    format!("{pad}{msg}")
}

pub fn centered(msg: impl Display) {
    print(&centered_line(&msg));
}

pub fn rule() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// Framed notice for a run where no host qualified.
pub fn no_hosts_lines(scope: &str) -> Vec<String> {
    let text = format!("nothing qualified in {scope}");
    let inner = TOTAL_WIDTH - 2;
    let pad = inner.saturating_sub(console::measure_text_width(&text));
    let left = pad / 2;

    vec![
        format!("┌{}┐", "─".repeat(inner)).red().to_string(),
        format!(
            "{}{}{}{}{}",
            "│".red(),
            " ".repeat(left),
            text.red().bold(),
            " ".repeat(pad - left),
            "│".red()
        ),
        format!("└{}┘", "─".repeat(inner)).red().to_string(),
    ]
}

pub fn no_hosts(scope: &str) {
    for line in no_hosts_lines(scope) {
        print(&line);
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
