use std::path::Path;

use crux_core::Threshold;
use crux_detection::DetectionConfig;
use crux_ports::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Root configuration for a Crux session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CruxConfig {
    /// Threshold for boulders without a stored value (m/s²)
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,
    #[serde(default)]
    pub detection: DetectionConfig,
}

impl Default for CruxConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            detection: DetectionConfig::default(),
        }
    }
}

impl CruxConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.threshold()?;
        self.detection.validate()
    }

    /// Default threshold as a validated value
    pub fn threshold(&self) -> ConfigResult<Threshold> {
        Threshold::new(self.default_threshold)
            .map_err(|e| ConfigError::Invalid(format!("default_threshold: {}", e)))
    }
}

fn default_threshold() -> f64 {
    Threshold::DEFAULT.value()
}
