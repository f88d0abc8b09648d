//! End-to-end runs of the probing engine against a scripted network.

#[cfg(test)]
mod mock;

#[cfg(test)]
mod discovery;

#[cfg(test)]
mod port_scan;
