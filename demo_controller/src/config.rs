//! Timing configuration for the controller.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;
use crate::reducer::Delay;

/// Delays used when the reducer asks for a scheduled action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Pause between auto-play steps.
    pub auto_play_interval_ms: u64,

    /// How long the canned reply takes after a visitor types something.
    pub reply_delay_ms: u64,

    /// Time from "connect" until the BOL scan starts.
    pub erp_handshake_ms: u64,

    /// Duration of the BOL scan.
    pub erp_scan_ms: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            auto_play_interval_ms: 2500,
            reply_delay_ms: 1000,
            erp_handshake_ms: 1000,
            erp_scan_ms: 2000,
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a config. Missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: ControllerConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto_play_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Resolve a symbolic delay.
    pub fn duration(&self, delay: Delay) -> Duration {
        let ms = match delay {
            Delay::AutoPlay => self.auto_play_interval_ms,
            Delay::Reply => self.reply_delay_ms,
            Delay::ErpHandshake => self.erp_handshake_ms,
            Delay::ErpScan => self.erp_scan_ms,
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.duration(Delay::AutoPlay), Duration::from_millis(2500));
        assert_eq!(config.duration(Delay::Reply), Duration::from_secs(1));
        assert_eq!(config.duration(Delay::ErpScan), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ControllerConfig::from_toml_str("reply_delay_ms = 250").unwrap();
        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.auto_play_interval_ms, 2500);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = ControllerConfig::from_toml_str("auto_play_interval_ms = 0");
        assert!(matches!(result, Err(ConfigError::ZeroInterval)));
    }

    #[test]
    fn test_bad_toml() {
        let result = ControllerConfig::from_toml_str("reply_delay_ms = \"soon\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
