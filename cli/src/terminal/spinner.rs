use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);
const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn active() -> MutexGuard<'static, Option<ProgressBar>> {
    ACTIVE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shows the sweep spinner until [`stop`] is called.
pub fn start(total_hosts: usize) {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(TICK_STRINGS));
    }
    pb.enable_steady_tick(TICK);
    pb.set_message(format!("Dispatching {} host tasks...", total_hosts.to_string().bold()));

    if let Some(previous) = active().replace(pb) {
        previous.finish_and_clear();
    }
}

pub fn report_progress(finished: usize, total: usize) {
    if let Some(pb) = active().as_ref() {
        pb.set_message(format!(
            "Swept {} of {} hosts...",
            finished.to_string().green().bold(),
            total
        ));
    }
}

pub fn stop() {
    if let Some(pb) = active().take() {
        pb.finish_and_clear();
    }
}

/// Log sink: prints above the spinner while one is running, else to stdout.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end_matches('\n');

        match active().as_ref() {
            Some(pb) if !pb.is_hidden() => pb.println(msg),
            _ => writeln!(std::io::stdout().lock(), "{msg}")?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}
