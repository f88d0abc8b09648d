//! Shared run flow for both modes: spinner, engine run, report file and
//! terminal summary.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use scanvenger_common::{
    config::Config, network::host::HostResult, network::target::Target, success,
};
use scanvenger_core::{
    report,
    scanner::{self, ProgressCallback, ScanMode},
};

use crate::terminal::{format, print, spinner};
use crate::mprint;

pub async fn execute(target: Target, mode: ScanMode, cfg: &Config) -> anyhow::Result<()> {
    spinner::start(target.host_count());
    let on_progress: ProgressCallback = Arc::new(spinner::report_progress);

    let start_time: Instant = Instant::now();
    let mut results: Vec<HostResult> =
        scanner::perform_scan(target, mode.clone(), cfg, Some(on_progress)).await;
    spinner::stop();

    let path: PathBuf = cfg
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(mode.report_file_name()));
    report::write(&results, &path).await?;

    run_ends(&mut results, target, start_time.elapsed(), cfg);
    success!("Results saved to {}", path.display());
    Ok(())
}

fn run_ends(results: &mut [HostResult], target: Target, total_time: Duration, cfg: &Config) {
    if results.is_empty() {
        print::section("no hosts", cfg.quiet);
        if cfg.quiet < 2 {
            print::no_hosts(&target.to_string());
        }
        return;
    }

    if cfg.quiet > 0 {
        mprint!();
    }

    print::section("results", cfg.quiet);
    results.sort_by_key(|result| result.addr);
    print_hosts(results, cfg);
    print_summary(results.len(), total_time, cfg);
}

fn print_hosts(results: &[HostResult], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    for (idx, result) in results.iter().enumerate() {
        print::host(idx, &result.hostname, &format::host_to_detail(result));
        if idx + 1 != results.len() {
            mprint!();
        }
    }
}

fn print_summary(hosts_len: usize, total_time: Duration, cfg: &Config) {
    let hosts: ColoredString = format!("{hosts_len} hosts").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let summary: String = format!("{hosts} reported in {elapsed}");

    if cfg.quiet == 0 {
        print::rule();
        print::centered(&summary);
    } else {
        success!("{summary}");
    }
}
