use scanvenger_common::{config::Config, network::target::Target};
use scanvenger_core::scanner::ScanMode;

use crate::commands::sweep;
use crate::terminal::print;

pub async fn discover(target: Target, cfg: &Config) -> anyhow::Result<()> {
    if cfg.quiet == 0 {
        print::param("Target", target);
        print::param("Hosts", target.host_count());
        print::param("Echo timeout", format!("{}ms", cfg.ping_timeout.as_millis()));
    }

    sweep::execute(target, ScanMode::Discovery, cfg).await
}
