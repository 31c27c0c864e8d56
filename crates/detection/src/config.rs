use crux_ports::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Divisor used by the 3D radial view
pub const VISUALIZER_DIVISOR: f64 = 20.0;

/// Divisor used by the acceleration/time chart
pub const CHART_DIVISOR: f64 = 30.0;

/// Constants shared by every detection site
///
/// The views only differ in how they normalize dynamics, so each consumer
/// picks a divisor here instead of carrying its own copy of the detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Refractory period between two detected moves, in seconds
    #[serde(default = "default_min_move_gap")]
    pub min_move_gap: f64,
    /// A move is a crux when its acceleration exceeds `threshold * crux_factor`
    #[serde(default = "default_crux_factor")]
    pub crux_factor: f64,
    /// Acceleration mapped to dynamics 1.0
    #[serde(default = "default_normalization_divisor")]
    pub normalization_divisor: f64,
    /// Start move acceleration when the series has no usable first sample
    #[serde(default = "default_start_fallback")]
    pub start_fallback: f64,
    /// Dynamics of the synthetic start move
    #[serde(default = "default_start_dynamics")]
    pub start_dynamics: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_move_gap: default_min_move_gap(),
            crux_factor: default_crux_factor(),
            normalization_divisor: default_normalization_divisor(),
            start_fallback: default_start_fallback(),
            start_dynamics: default_start_dynamics(),
        }
    }
}

impl DetectionConfig {
    /// Defaults tuned for the 3D radial view
    pub fn visualizer() -> Self {
        Self::default()
    }

    /// Defaults tuned for the acceleration/time chart
    pub fn chart() -> Self {
        Self::default().with_normalization_divisor(CHART_DIVISOR)
    }

    pub fn with_min_move_gap(mut self, gap: f64) -> Self {
        self.min_move_gap = gap;
        self
    }

    pub fn with_crux_factor(mut self, factor: f64) -> Self {
        self.crux_factor = factor;
        self
    }

    pub fn with_normalization_divisor(mut self, divisor: f64) -> Self {
        self.normalization_divisor = divisor;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.min_move_gap.is_finite() && self.min_move_gap >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_move_gap must be finite and >= 0, got {}",
                self.min_move_gap
            )));
        }
        if !(self.crux_factor.is_finite() && self.crux_factor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "crux_factor must be finite and > 0, got {}",
                self.crux_factor
            )));
        }
        if !(self.normalization_divisor.is_finite() && self.normalization_divisor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "normalization_divisor must be finite and > 0, got {}",
                self.normalization_divisor
            )));
        }
        if !self.start_fallback.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "start_fallback must be finite, got {}",
                self.start_fallback
            )));
        }
        if !(0.0..=1.0).contains(&self.start_dynamics) {
            return Err(ConfigError::Invalid(format!(
                "start_dynamics must be within [0, 1], got {}",
                self.start_dynamics
            )));
        }
        Ok(())
    }
}

// Default value functions for serde
fn default_min_move_gap() -> f64 {
    0.5
}

fn default_crux_factor() -> f64 {
    1.5
}

fn default_normalization_divisor() -> f64 {
    VISUALIZER_DIVISOR
}

fn default_start_fallback() -> f64 {
    9.8
}

fn default_start_dynamics() -> f64 {
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DetectionConfig::default();
        assert_eq!(config.min_move_gap, 0.5);
        assert_eq!(config.crux_factor, 1.5);
        assert_eq!(config.normalization_divisor, 20.0);
        assert_eq!(config.start_fallback, 9.8);
        assert_eq!(config.start_dynamics, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chart_preset_only_changes_divisor() {
        let chart = DetectionConfig::chart();
        assert_eq!(chart.normalization_divisor, CHART_DIVISOR);
        assert_eq!(chart.min_move_gap, DetectionConfig::default().min_move_gap);
        assert_eq!(chart.crux_factor, DetectionConfig::default().crux_factor);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DetectionConfig =
            serde_json::from_str(r#"{ "normalization_divisor": 25.0 }"#).unwrap();
        assert_eq!(config.normalization_divisor, 25.0);
        assert_eq!(config.min_move_gap, 0.5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(
            DetectionConfig::default()
                .with_normalization_divisor(0.0)
                .validate()
                .is_err()
        );
        assert!(
            DetectionConfig::default()
                .with_min_move_gap(-0.1)
                .validate()
                .is_err()
        );
        assert!(
            DetectionConfig::default()
                .with_crux_factor(f64::NAN)
                .validate()
                .is_err()
        );

        let mut config = DetectionConfig::default();
        config.start_dynamics = 1.2;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
