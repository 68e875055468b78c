//! Configuration type definitions

use escapement_core::TimerConfig;
use heapless::String;
use serde::Deserialize;

use super::loader::ConfigError;

/// Maximum SSID length in bytes
pub const MAX_SSID_LEN: usize = 32;

/// Complete demo configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    pub engine: EngineConfig,
    pub startup: StartupConfig,
    pub wifi: WifiConfig,
}

/// Host loop settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Milliseconds between two `run` calls
    pub tick_interval_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
        }
    }
}

/// Startup state settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartupConfig {
    /// Settle timer armed on entry
    pub wait: TimerConfig,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            wait: TimerConfig::single(5),
        }
    }
}

/// Wi-Fi sequence settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WifiConfig {
    /// Network name, for logging
    pub ssid: String<MAX_SSID_LEN>,
    /// Poll timer while waiting for an address
    pub ip_poll: TimerConfig,
    /// Polls after which the address counts as configured
    pub ip_poll_limit: u8,
}

impl Default for WifiConfig {
    fn default() -> Self {
        let mut ssid = String::new();
        let _ = ssid.push_str("workshop");
        Self {
            ssid,
            ip_poll: TimerConfig::repeat(1),
            ip_poll_limit: 5,
        }
    }
}

impl DemoConfig {
    /// Check value ranges that the TOML schema cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "engine.tick_interval_ms",
                reason: "must be greater than zero",
            });
        }
        if self.startup.wait.ticks == 0 {
            return Err(ConfigError::Invalid {
                field: "startup.wait.ticks",
                reason: "must be greater than zero",
            });
        }
        if self.wifi.ssid.is_empty() {
            return Err(ConfigError::Invalid {
                field: "wifi.ssid",
                reason: "must not be empty",
            });
        }
        if self.wifi.ip_poll.ticks == 0 {
            return Err(ConfigError::Invalid {
                field: "wifi.ip_poll.ticks",
                reason: "must be greater than zero",
            });
        }
        if self.wifi.ip_poll_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "wifi.ip_poll_limit",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}
