pub mod discover;
pub mod menu;
pub mod scan;
pub mod sweep;

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::TypedValueParser;
use clap::{ArgAction, Parser, Subcommand};
use scanvenger_common::config::{Config, DEFAULT_CONCURRENCY, LimiterScope};
use scanvenger_common::network::range::HostOrder;
use scanvenger_common::network::target::Target;
use scanvenger_common::ports::PortList;

#[derive(Parser)]
#[command(name = "scanvenger")]
#[command(version)]
#[command(about = "Subnet reconnaissance: live hosts, OS guesses and open TCP ports.")]
#[command(long_about = "Subnet reconnaissance: live hosts, OS guesses and open TCP ports.\n\nRun without a subcommand for the interactive menu.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Skip reverse DNS, name hosts by their address
    #[arg(long, global = true)]
    pub no_dns: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output (-q hides headers, -qq also hides the host list)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output (-v debug for the engine, -vv debug everywhere)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Maximum number of probes in flight across the whole run
    #[arg(short, long, global = true, default_value_t = DEFAULT_CONCURRENCY,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub concurrency: usize,

    /// Echo timeout in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = 1_000)]
    pub ping_timeout: u64,

    /// TCP connect timeout in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = 2_000)]
    pub connect_timeout: u64,

    /// Sweep hosts by ascending last octet instead of string order
    #[arg(long, global = true)]
    pub numeric_order: bool,

    /// Also count echoes and DNS lookups against the concurrency limit
    #[arg(long, global = true)]
    pub gate_all: bool,

    /// Report file (defaults to a name derived from the scan mode)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find live hosts and guess their operating system
    #[command(alias = "d")]
    Discover { target: Target },
    /// Probe TCP ports on every live host
    #[command(alias = "s")]
    Scan {
        target: Target,
        /// Preset (web, admin, top20) or a list such as 80,443,8000-8100
        #[arg(short, long, default_value = "web")]
        ports: PortList,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_dns: self.no_dns,
            no_banner: self.no_banner,
            quiet: self.quiet,
            concurrency: self.concurrency,
            ping_timeout: Duration::from_millis(self.ping_timeout),
            connect_timeout: Duration::from_millis(self.connect_timeout),
            host_order: if self.numeric_order {
                HostOrder::Numeric
            } else {
                HostOrder::Lexical
            },
            limiter_scope: if self.gate_all {
                LimiterScope::AllProbes
            } else {
                LimiterScope::PortProbes
            },
            output: self.output.clone(),
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
