mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, menu, scan};
use scanvenger_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;
    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Some(Commands::Discover { target }) => {
            print::section("discovery", cfg.quiet);
            discover::discover(target, &cfg).await
        }
        Some(Commands::Scan { target, ports }) => {
            print::section("port scan", cfg.quiet);
            scan::scan(target, ports, &cfg).await
        }
        None => menu::menu(&cfg).await,
    };

    if cfg.quiet == 0 {
        print::rule();
    }
    result
}
