use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a [`Series`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    #[error("time has {time} samples but magnitude has {magnitude}")]
    LengthMismatch { time: usize, magnitude: usize },
}

/// Acceleration magnitude recorded during one climbing attempt
///
/// Two parallel sequences sharing one index space: `time` in seconds and the
/// precomputed absolute acceleration `magnitude` in m/s². Samples may contain
/// non-finite values coming from malformed sensor data; detection treats them
/// as never qualifying.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SeriesRepr")]
pub struct Series {
    time: Vec<f64>,
    magnitude: Vec<f64>,
}

#[derive(Deserialize)]
struct SeriesRepr {
    time: Vec<f64>,
    magnitude: Vec<f64>,
}

impl TryFrom<SeriesRepr> for Series {
    type Error = SeriesError;

    fn try_from(repr: SeriesRepr) -> Result<Self, Self::Error> {
        Series::new(repr.time, repr.magnitude)
    }
}

impl Series {
    /// Build a series from parallel time and magnitude vectors
    pub fn new(time: Vec<f64>, magnitude: Vec<f64>) -> Result<Self, SeriesError> {
        if time.len() != magnitude.len() {
            return Err(SeriesError::LengthMismatch {
                time: time.len(),
                magnitude: magnitude.len(),
            });
        }
        Ok(Self { time, magnitude })
    }

    /// Build a series from `(time, magnitude)` pairs
    pub fn from_samples(samples: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (time, magnitude) = samples.into_iter().unzip();
        Self { time, magnitude }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn magnitude(&self) -> &[f64] {
        &self.magnitude
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Sample at index `i` as `(time, magnitude)`
    pub fn sample(&self, i: usize) -> Option<(f64, f64)> {
        Some((*self.time.get(i)?, *self.magnitude.get(i)?))
    }

    pub fn first_time(&self) -> Option<f64> {
        self.time.first().copied()
    }

    pub fn last_time(&self) -> Option<f64> {
        self.time.last().copied()
    }

    /// Iterate samples as `(time, magnitude)` pairs
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.magnitude.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = Series::new(vec![0.0, 1.0], vec![9.8]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::LengthMismatch {
                time: 2,
                magnitude: 1
            }
        );
    }

    #[test]
    fn test_from_samples() {
        let series = Series::from_samples([(0.0, 9.8), (0.5, 11.0), (1.0, 10.2)]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.time(), &[0.0, 0.5, 1.0]);
        assert_eq!(series.magnitude(), &[9.8, 11.0, 10.2]);
        assert_eq!(series.sample(1), Some((0.5, 11.0)));
        assert_eq!(series.sample(3), None);
        assert_eq!(series.first_time(), Some(0.0));
        assert_eq!(series.last_time(), Some(1.0));
    }

    #[test]
    fn test_default_is_empty() {
        let series = Series::default();
        assert!(series.is_empty());
        assert_eq!(series.first_time(), None);
    }

    #[test]
    fn test_deserialize_validates_lengths() {
        let ok: Series = serde_json::from_str(r#"{"time":[0,1],"magnitude":[9.8,12]}"#).unwrap();
        assert_eq!(ok.len(), 2);

        let bad = serde_json::from_str::<Series>(r#"{"time":[0,1,2],"magnitude":[9.8]}"#);
        assert!(bad.is_err());
    }
}
