/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed engine configuration
[POS]:    Configuration layer - lifecycle timings
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lifecycle timing configuration for the task engine
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Delay before a pending task starts running, in milliseconds
    #[serde(default = "default_pending_to_running_ms")]
    pub pending_to_running_ms: u64,
    /// Further delay before a running task reaches its outcome, in milliseconds
    #[serde(default = "default_running_to_completed_ms")]
    pub running_to_completed_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pending_to_running_ms: default_pending_to_running_ms(),
            running_to_completed_ms: default_running_to_completed_ms(),
        }
    }
}

fn default_pending_to_running_ms() -> u64 {
    1000
}

fn default_running_to_completed_ms() -> u64 {
    2000
}

impl EngineConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Delay before the pending to running transition
    pub fn pending_delay(&self) -> Duration {
        Duration::from_millis(self.pending_to_running_ms)
    }

    /// Delay a simulated executor spends in the running phase
    pub fn running_delay(&self) -> Duration {
        Duration::from_millis(self.running_to_completed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.pending_to_running_ms, 1000);
        assert_eq!(config.running_to_completed_ms, 2000);
        assert_eq!(config.pending_delay(), Duration::from_millis(1000));
        assert_eq!(config.running_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_yaml::from_str("pending_to_running_ms: 50\n").expect("parse");
        assert_eq!(config.pending_to_running_ms, 50);
        assert_eq!(config.running_to_completed_ms, 2000);
    }

    #[test]
    fn test_empty_yaml_is_all_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").expect("parse");
        assert_eq!(config, EngineConfig::default());
    }
}
