use crate::error::ProbeError;

/// Result of a single liveness or port probe.
///
/// Liveness probes carry the reply's hop count (`u8`), port probes carry `()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome<T> {
    Success(T),
    Failure,
    Timeout,
}

impl<T> ProbeOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success(_))
    }
}

impl<T> From<Result<T, ProbeError>> for ProbeOutcome<T> {
    fn from(result: Result<T, ProbeError>) -> Self {
        match result {
            Ok(value) => ProbeOutcome::Success(value),
            Err(ProbeError::Timeout(_)) => ProbeOutcome::Timeout,
            Err(_) => ProbeOutcome::Failure,
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
