//! Network collaborators for zeroloop.
//!
//! The shell core treats network access as an external concern: this
//! crate provides the IP geolocation client used by `scanip` and the
//! simulated transport behind `ping`.

mod geo;
mod sim;

/// HTTP client for the IP geolocation API.
pub use geo::GeoClient;
/// Geolocation API response fields rendered by `scanip`.
pub use geo::IpInfo;
/// Fake DNS resolution for the simulated transport.
pub use sim::resolve_host;
/// Sample one simulated round-trip time.
pub use sim::sample_rtt;
