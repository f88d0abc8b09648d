//! TTL-based OS guess.
//!
//! Default initial TTLs are 64 for Linux/Unix stacks and 128 for Windows;
//! values in between are hops lost on the way.

use std::ops::RangeInclusive;

use scanvenger_common::network::host::OsGuess;
use scanvenger_common::network::probe::ProbeOutcome;

pub const LINUX_MAX_TTL: u8 = 64;
pub const WINDOWS_TTL: RangeInclusive<u8> = 100..=128;

/// Windows-only services. Never reported for a host classified as Linux.
pub const WINDOWS_ONLY_PORTS: [u16; 6] = [135, 139, 445, 3389, 5985, 5986];

pub fn classify(hops: u8) -> OsGuess {
    match hops {
        h if h <= LINUX_MAX_TTL => OsGuess::Linux,
        h if WINDOWS_TTL.contains(&h) => OsGuess::Windows,
        h => OsGuess::Unknown(h),
    }
}

/// Folds a liveness outcome into a guess. Failure and timeout are unreachable.
pub fn guess(liveness: &ProbeOutcome<u8>) -> OsGuess {
    match liveness {
        ProbeOutcome::Success(hops) => classify(*hops),
        ProbeOutcome::Failure | ProbeOutcome::Timeout => OsGuess::Unreachable,
    }
}

/// Removes ports that contradict the OS guess.
pub fn retain_plausible<I>(os: OsGuess, ports: I) -> Vec<u16>
where
    I: IntoIterator<Item = u16>,
{
    ports
        .into_iter()
        .filter(|port| os != OsGuess::Linux || !WINDOWS_ONLY_PORTS.contains(port))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
