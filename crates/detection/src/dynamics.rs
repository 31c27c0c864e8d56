//! Dynamics and crux classification
//!
//! Maps a peak's raw acceleration to a normalized intensity and decides
//! whether it is forceful enough to be flagged as a crux.

use crux_core::{Dynamics, Threshold};

use crate::config::DetectionConfig;

/// Result of classifying one peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub dynamics: Dynamics,
    pub is_crux: bool,
}

/// Maps raw peak acceleration to dynamics and crux flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicsMapper {
    normalization_divisor: f64,
    crux_factor: f64,
    start_dynamics: Dynamics,
}

impl DynamicsMapper {
    pub fn new(normalization_divisor: f64, crux_factor: f64) -> Self {
        Self {
            normalization_divisor,
            crux_factor,
            start_dynamics: Dynamics::new(0.3),
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self {
            normalization_divisor: config.normalization_divisor,
            crux_factor: config.crux_factor,
            start_dynamics: Dynamics::new(config.start_dynamics),
        }
    }

    pub fn normalization_divisor(&self) -> f64 {
        self.normalization_divisor
    }

    pub fn crux_factor(&self) -> f64 {
        self.crux_factor
    }

    /// Classify a detected peak
    ///
    /// `is_crux` uses a strict comparison: a peak exactly at
    /// `threshold * crux_factor` is not a crux.
    pub fn classify(&self, raw_acceleration: f64, threshold: Threshold) -> Classification {
        Classification {
            dynamics: Dynamics::new(raw_acceleration / self.normalization_divisor),
            is_crux: raw_acceleration > threshold.scaled(self.crux_factor),
        }
    }

    /// Fixed classification of the synthetic start move, independent of its
    /// acceleration
    pub fn classify_start(&self) -> Classification {
        Classification {
            dynamics: self.start_dynamics,
            is_crux: false,
        }
    }
}

impl Default for DynamicsMapper {
    fn default() -> Self {
        Self::from_config(&DetectionConfig::default())
    }
}
