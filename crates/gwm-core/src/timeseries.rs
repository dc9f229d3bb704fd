//! A minimal paired time/value container used for model output.

use crate::errors::{GwmError, GwmResult};
use serde::{Deserialize, Serialize};

pub type FloatValue = f64;
pub type Time = f64;

/// Values sampled at (monotonically increasing) times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeseries {
    time: Vec<Time>,
    values: Vec<FloatValue>,
}

impl Timeseries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Build a timeseries from matching value and time vectors.
    pub fn from_values(values: Vec<FloatValue>, time: Vec<Time>) -> GwmResult<Self> {
        if values.len() != time.len() {
            return Err(GwmError::InvalidInput(format!(
                "timeseries needs one value per time point, got {} values and {} times",
                values.len(),
                time.len()
            )));
        }
        Ok(Self { time, values })
    }

    pub fn push(&mut self, time: Time, value: FloatValue) {
        self.time.push(time);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn time(&self) -> &[Time] {
        &self.time
    }

    pub fn values(&self) -> &[FloatValue] {
        &self.values
    }

    pub fn latest_value(&self) -> Option<FloatValue> {
        self.values.last().copied()
    }

    /// Index of the sample taken exactly at `time`.
    pub fn index_of(&self, time: Time) -> Option<usize> {
        self.time.iter().position(|&t| (t - time).abs() < 1e-9)
    }

    /// Value sampled at `time`.
    ///
    /// No interpolation is performed, `time` must be one of the sample times.
    pub fn at_time(&self, time: Time) -> GwmResult<FloatValue> {
        self.index_of(time)
            .map(|i| self.values[i])
            .ok_or(GwmError::MissingTime(time))
    }

    /// Index of the first value that is at or above `threshold`.
    pub fn first_crossing(&self, threshold: FloatValue) -> Option<usize> {
        self.values.iter().position(|&v| v >= threshold)
    }

    /// The first `len` samples.
    pub fn truncated(&self, len: usize) -> Self {
        let len = len.min(self.len());
        Self {
            time: self.time[..len].to_vec(),
            values: self.values[..len].to_vec(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Time, FloatValue)> + '_ {
        self.time.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Timeseries {
        Timeseries::from_values(vec![1.0, 3.0, 5.0, 4.0], vec![2000.0, 2005.0, 2010.0, 2015.0])
            .unwrap()
    }

    #[test]
    fn test_from_values_length_mismatch() {
        let result = Timeseries::from_values(vec![1.0, 2.0], vec![2000.0]);
        assert!(matches!(result, Err(GwmError::InvalidInput(_))));
    }

    #[test]
    fn test_at_time() {
        let ts = example();
        assert_eq!(ts.at_time(2010.0).unwrap(), 5.0);
        assert!(matches!(ts.at_time(2011.0), Err(GwmError::MissingTime(_))));
    }

    #[test]
    fn test_first_crossing() {
        let ts = example();
        assert_eq!(ts.first_crossing(3.0), Some(1));
        assert_eq!(ts.first_crossing(4.5), Some(2));
        assert_eq!(ts.first_crossing(10.0), None);
    }

    #[test]
    fn test_truncated() {
        let ts = example();
        let head = ts.truncated(2);
        assert_eq!(head.values(), &[1.0, 3.0]);
        assert_eq!(head.time(), &[2000.0, 2005.0]);
        assert_eq!(ts.truncated(10).len(), 4);
    }

    #[test]
    fn test_push_and_latest() {
        let mut ts = Timeseries::new();
        assert!(ts.is_empty());
        assert_eq!(ts.latest_value(), None);
        ts.push(0.0, 1.5);
        ts.push(1.0, 2.5);
        assert_eq!(ts.latest_value(), Some(2.5));
        assert_eq!(ts.iter().collect::<Vec<_>>(), vec![(0.0, 1.5), (1.0, 2.5)]);
    }

    #[test]
    fn test_serialization() {
        let ts = example();
        let json = serde_json::to_string(&ts).expect("Serialization failed");
        let parsed: Timeseries = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(ts, parsed);
    }
}
