//! Shared models for the scanvenger workspace.
//!
//! Everything here is free of network I/O: targets, port lists, probe
//! outcomes, per-host results and the run configuration. The probing engine
//! lives in `scanvenger-core`.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod ports;

#[doc(hidden)]
pub use tracing;
