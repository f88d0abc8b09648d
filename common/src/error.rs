use std::net::IpAddr;
use std::time::Duration;

use thiserror::Error;

/// Failure of a single liveness or port probe.
///
/// These never leave the probe layer as errors; they are folded into a
/// negative [`ProbeOutcome`](crate::network::probe::ProbeOutcome).
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("no answer within {0:?}")]
    Timeout(Duration),
    #[error("connection failed: {0}")]
    Connection(#[from] std::io::Error),
    #[error("icmp echo failed: {0}")]
    Icmp(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("reverse lookup for {addr} failed: {reason}")]
    Lookup { addr: IpAddr, reason: String },
    #[error("resolver task did not complete: {0}")]
    Aborted(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortParseError {
    #[error("invalid port: '{0}'")]
    InvalidToken(String),
    #[error("port out of range (1-65535): '{0}'")]
    OutOfRange(String),
    #[error("range start is greater than its end: '{0}'")]
    ReversedRange(String),
    #[error("no usable ports in '{0}'")]
    Empty(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("target cannot be empty")]
    Empty,
    #[error("IPv6 targets are not supported: {0}")]
    Ipv6(String),
    #[error("invalid IPv4 address: '{0}'")]
    InvalidAddress(String),
    #[error("invalid prefix in CIDR: '{0}'")]
    InvalidPrefix(String),
}
