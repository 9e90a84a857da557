// ABOUTME: Validated (time, rate) observation fed to the segment classifier
// ABOUTME: Rejects NaN, negative rates, and decreasing timestamps at the data boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use serde::{Deserialize, Serialize};

use crate::errors::SegmentationError;

/// One observation from an activity's recorded time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since activity start
    pub time: f64,
    /// Instantaneous speed in meters per second
    pub rate: f64,
}

impl Sample {
    /// Create a sample without validation
    #[must_use]
    pub const fn new(time: f64, rate: f64) -> Self {
        Self { time, rate }
    }

    /// Check that this sample's own fields are usable
    ///
    /// # Errors
    ///
    /// Returns `SegmentationError::InvalidSample` if `time` is not finite or
    /// `rate` is NaN, infinite, or negative.
    pub fn validate(&self, index: usize) -> Result<(), SegmentationError> {
        if !self.time.is_finite() {
            return Err(SegmentationError::invalid_sample(
                index,
                format!("time {} is not a finite number", self.time),
            ));
        }
        if !self.rate.is_finite() {
            return Err(SegmentationError::invalid_sample(
                index,
                format!("rate {} is not a finite number", self.rate),
            ));
        }
        if self.rate < 0.0 {
            return Err(SegmentationError::invalid_sample(
                index,
                format!("rate {} m/s is negative", self.rate),
            ));
        }
        Ok(())
    }
}

/// Validate a whole sequence: every sample on its own, then timestamp order.
///
/// Equal consecutive timestamps are accepted (zero-width interval).
///
/// # Errors
///
/// Returns `SegmentationError::InvalidSample` for the first offending index.
pub fn validate_sequence(samples: &[Sample]) -> Result<(), SegmentationError> {
    let mut previous: Option<f64> = None;
    for (index, sample) in samples.iter().enumerate() {
        sample.validate(index)?;
        if let Some(prev) = previous {
            if sample.time < prev {
                return Err(SegmentationError::invalid_sample(
                    index,
                    format!("time {} precedes previous time {prev}", sample.time),
                ));
            }
        }
        previous = Some(sample.time);
    }
    Ok(())
}

/// Zip parallel time and rate arrays into validated samples
///
/// # Errors
///
/// Returns `SegmentationError::InvalidSample` when the arrays differ in length
/// or any resulting sample fails [`validate_sequence`].
pub fn zip_samples(times: &[f64], rates: &[f64]) -> Result<Vec<Sample>, SegmentationError> {
    if times.len() != rates.len() {
        return Err(SegmentationError::invalid_stream(format!(
            "time stream has {} points but rate stream has {}",
            times.len(),
            rates.len()
        )));
    }

    let samples: Vec<Sample> = times
        .iter()
        .zip(rates)
        .map(|(&time, &rate)| Sample::new(time, rate))
        .collect();
    validate_sequence(&samples)?;
    Ok(samples)
}
