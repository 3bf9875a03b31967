//! Simulated transport for the demo commands.
//!
//! There is no real ICMP or DNS here: the replies only need plausible
//! shape and timing.

use std::time::Duration;

use rand::Rng;

/// Produce a fake IPv6 address standing in for a DNS resolution.
pub fn resolve_host(host: &str) -> String {
    log::debug!("resolving {host}");
    let mut rng = rand::rng();
    let segments: Vec<String> = (0..8).map(|_| format!("{:04x}", rng.random::<u16>())).collect();
    segments.join(":")
}

/// Sample one round-trip time from `[min_ms, max_ms)`.
pub fn sample_rtt(min_ms: u64, max_ms: u64) -> Duration {
    let mut rng = rand::rng();
    let upper = max_ms.max(min_ms + 1);
    Duration::from_millis(rng.random_range(min_ms..upper))
}
