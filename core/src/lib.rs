//! # Scanvenger probing engine
//!
//! Fans out liveness and port-connect probes over a host or a /24 sweep,
//! bounded by one [`limiter::ConcurrencyLimiter`] per run, and collects the
//! qualifying hosts in a [`aggregator::ResultAggregator`].
//!
//! * **[`network`]**: probe primitives (ICMP echo, TCP connect, reverse DNS)
//!   behind the [`network::Prober`] seam.
//! * **[`fingerprint`]**: OS guess from the echo hop count.
//! * **[`scanner`]**: per-host scanners and the subnet fan-out.
//! * **[`report`]**: the fixed-width text report.

pub mod aggregator;
pub mod fingerprint;
pub mod limiter;
pub mod network;
pub mod report;
pub mod scanner;
