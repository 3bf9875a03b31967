//! Shell configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a zeroloop session.
///
/// Every field has a default, so a config file only needs the values it
/// wants to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Banner lines printed when the session starts.
    pub banner: Vec<String>,
    /// Prompt shown in front of the input line.
    pub prompt: String,
    /// Number of echo requests `ping` sends.
    pub ping_count: u32,
    /// Lower bound for simulated round-trip times, in milliseconds.
    pub ping_min_ms: u64,
    /// Upper bound (exclusive) for simulated round-trip times.
    pub ping_max_ms: u64,
    /// Payload size reported in the ping header.
    pub ping_payload_bytes: u32,
    /// Geolocation API endpoint; `{ip}` is replaced with the address.
    pub geo_endpoint: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: vec![
                "Welcome to ZeroLoop!".to_string(),
                "Type 'help' to see available commands.".to_string(),
            ],
            prompt: "> ".to_string(),
            ping_count: 4,
            ping_min_ms: 30,
            ping_max_ms: 80,
            ping_payload_bytes: 32,
            geo_endpoint: "https://ipapi.co/{ip}/json/".to_string(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_shell() {
        let config = ShellConfig::default();
        assert_eq!(config.banner[0], "Welcome to ZeroLoop!");
        assert_eq!(config.ping_count, 4);
        assert_eq!(config.ping_min_ms, 30);
        assert_eq!(config.ping_max_ms, 80);
        assert!(config.geo_endpoint.contains("{ip}"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ShellConfig = toml::from_str("prompt = \"$ \"").unwrap();
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.ping_count, 4);
        assert_eq!(config.banner.len(), 2);
    }

    #[test]
    fn toml_round_trip() {
        let config = ShellConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let back: ShellConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back.prompt, config.prompt);
        assert_eq!(back.ping_payload_bytes, config.ping_payload_bytes);
    }
}
