use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Errors raised when building a [`Threshold`]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    #[error("Threshold must not be negative, got {0}")]
    Negative(f64),

    #[error("Threshold must be finite, got {0}")]
    NotFinite(f64),
}

/// Identifier of a boulder problem
///
/// Thresholds are tuned per boulder, so this is the key the threshold
/// store is indexed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoulderId(pub String);

impl BoulderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoulderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BoulderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BoulderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Detection threshold in m/s²
///
/// A local peak of the acceleration magnitude counts as a move only when it
/// is strictly above this value. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Threshold used for a boulder nobody has tuned yet
    pub const DEFAULT: Threshold = Threshold(12.0);

    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if !value.is_finite() {
            return Err(ThresholdError::NotFinite(value));
        }
        if value < 0.0 {
            return Err(ThresholdError::Negative(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Scale the threshold, e.g. by the crux factor
    pub fn scaled(&self, factor: f64) -> f64 {
        self.0 * factor
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s²", self.0)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(t: Threshold) -> Self {
        t.0
    }
}

/// Normalized move intensity in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(from = "f64", into = "f64")]
pub struct Dynamics(f64);

impl Dynamics {
    pub const ZERO: Dynamics = Dynamics(0.0);
    pub const MAX: Dynamics = Dynamics(1.0);

    /// Create a dynamics score, clamping to [0, 1]
    ///
    /// NaN maps to 0; +inf maps to 1.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Dynamics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Dynamics {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Dynamics> for f64 {
    fn from(d: Dynamics) -> Self {
        d.0
    }
}
