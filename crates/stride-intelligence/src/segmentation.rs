// ABOUTME: Run/walk segment classifier over irregularly sampled velocity time series
// ABOUTME: Threshold-classifies each interval, merges runs into segments, and totals per-state stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

//! # Segment Classifier
//!
//! Each sample closes one interval: the span since the previous sample, or a
//! synthetic interval for the first sample (one time unit by default, see
//! [`FirstIntervalPolicy`]). An interval is [`ActivityState::Fast`] when the
//! closing sample's rate is at or above the threshold, [`ActivityState::Slow`]
//! otherwise. Consecutive intervals in the same state form a [`Segment`].
//!
//! The running average is weighted by `rate * interval_distance`, i.e. by
//! `rate² * duration`, matching the pace shown on the activity dashboard.
//!
//! ```
//! use stride_core::models::Sample;
//! use stride_intelligence::segmentation::classify;
//!
//! let samples = [
//!     Sample::new(0.0, 1.0),
//!     Sample::new(1.0, 1.0),
//!     Sample::new(2.0, 3.0),
//!     Sample::new(3.0, 3.0),
//!     Sample::new(4.0, 1.0),
//! ];
//! let result = classify(&samples, 2.2)?;
//! assert_eq!(result.fast_segment_count(), 1);
//! assert_eq!(result.slow_duration(), 3.0);
//! # Ok::<(), stride_core::errors::SegmentationError>(())
//! ```

use serde::{Deserialize, Serialize};
use stride_core::constants::segmentation::FIRST_INTERVAL_SECONDS;
use stride_core::errors::SegmentationError;
use stride_core::models::{validate_sequence, Sample};
use tracing::debug;

use crate::config::{FirstIntervalPolicy, SegmentationConfig};

/// Classification of one interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityState {
    /// At or above the threshold (running)
    Fast,
    /// Below the threshold (walking)
    Slow,
}

impl ActivityState {
    /// Classify a rate against a threshold; equality counts as fast
    #[must_use]
    pub fn from_rate(rate: f64, threshold: f64) -> Self {
        if rate >= threshold {
            Self::Fast
        } else {
            Self::Slow
        }
    }

    /// Running-domain label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fast => "running",
            Self::Slow => "walking",
        }
    }
}

/// A maximal run of contiguous intervals sharing one state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// State shared by every interval in the segment
    pub state: ActivityState,
    /// Index of the first sample whose interval belongs to the segment
    pub start_index: usize,
    /// Index of the last sample whose interval belongs to the segment (inclusive)
    pub end_index: usize,
    /// Summed interval durations (seconds)
    pub duration: f64,
    /// Summed `rate * duration` over the segment (meters)
    pub distance: f64,
}

impl Segment {
    /// Number of samples (intervals) in the segment
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// Outcome of one classification call
///
/// Built in a single pass and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentationResult {
    fast_duration: f64,
    slow_duration: f64,
    fast_distance: f64,
    weighted_rate_sum: f64,
    fast_segment_count: usize,
    segments: Vec<Segment>,
}

impl SegmentationResult {
    /// Total seconds spent in `state`
    #[must_use]
    pub const fn duration(&self, state: ActivityState) -> f64 {
        match state {
            ActivityState::Fast => self.fast_duration,
            ActivityState::Slow => self.slow_duration,
        }
    }

    /// Total seconds classified fast (running time)
    #[must_use]
    pub const fn fast_duration(&self) -> f64 {
        self.fast_duration
    }

    /// Total seconds classified slow (walking time)
    #[must_use]
    pub const fn slow_duration(&self) -> f64 {
        self.slow_duration
    }

    /// Sum of both states' durations
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.fast_duration + self.slow_duration
    }

    /// Meters covered in fast intervals
    #[must_use]
    pub const fn fast_distance(&self) -> f64 {
        self.fast_distance
    }

    /// Sum of `rate * interval_distance` over fast intervals
    #[must_use]
    pub const fn weighted_rate_sum(&self) -> f64 {
        self.weighted_rate_sum
    }

    /// Number of separate fast runs
    #[must_use]
    pub const fn fast_segment_count(&self) -> usize {
        self.fast_segment_count
    }

    /// Distance-weighted average rate while fast (m/s)
    ///
    /// 0 when there is no fast distance, or when the sums overflowed and the
    /// ratio is not finite.
    #[must_use]
    pub fn average_fast_rate(&self) -> f64 {
        if self.fast_distance <= 0.0 {
            return 0.0;
        }
        let average = self.weighted_rate_sum / self.fast_distance;
        if average.is_finite() {
            average
        } else {
            0.0
        }
    }

    /// Segments in sample order; together they cover every sample index once
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the input had no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Local accumulators for one pass
#[derive(Default)]
struct Accumulator {
    result: SegmentationResult,
}

impl Accumulator {
    fn push(&mut self, index: usize, state: ActivityState, rate: f64, duration: f64) {
        let distance = rate * duration;
        let totals = &mut self.result;

        match state {
            ActivityState::Fast => {
                totals.fast_duration += duration;
                totals.fast_distance += distance;
                totals.weighted_rate_sum += rate * distance;
            }
            ActivityState::Slow => totals.slow_duration += duration,
        }

        if let Some(current) = totals.segments.last_mut().filter(|s| s.state == state) {
            current.end_index = index;
            current.duration += duration;
            current.distance += distance;
            return;
        }

        // Entering a new run
        if state == ActivityState::Fast {
            totals.fast_segment_count += 1;
        }
        totals.segments.push(Segment {
            state,
            start_index: index,
            end_index: index,
            duration,
            distance,
        });
    }

    fn finish(self) -> SegmentationResult {
        self.result
    }
}

/// Threshold classifier for velocity samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentClassifier {
    threshold: f64,
    first_interval: FirstIntervalPolicy,
}

impl SegmentClassifier {
    /// Create a classifier with the default first-interval policy
    ///
    /// # Errors
    ///
    /// Returns `SegmentationError::InvalidConfiguration` if `threshold` is
    /// negative or not finite
    pub fn new(threshold: f64) -> Result<Self, SegmentationError> {
        if !threshold.is_finite() {
            return Err(SegmentationError::invalid_configuration(format!(
                "threshold {threshold} is not a finite number"
            )));
        }
        if threshold < 0.0 {
            return Err(SegmentationError::invalid_configuration(format!(
                "threshold {threshold} m/s is negative"
            )));
        }
        Ok(Self {
            threshold,
            first_interval: FirstIntervalPolicy::UnitDuration,
        })
    }

    /// Create a classifier from a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns `SegmentationError::InvalidConfiguration` for an unusable threshold
    pub fn from_config(config: &SegmentationConfig) -> Result<Self, SegmentationError> {
        Ok(Self::new(config.running_threshold_mps)?.with_first_interval(config.first_interval))
    }

    /// Replace the first-interval policy
    #[must_use]
    pub const fn with_first_interval(mut self, policy: FirstIntervalPolicy) -> Self {
        self.first_interval = policy;
        self
    }

    /// Rate threshold separating slow from fast (m/s)
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Active first-interval policy
    #[must_use]
    pub const fn first_interval(&self) -> FirstIntervalPolicy {
        self.first_interval
    }

    /// Classify a sample sequence into run/walk segments
    ///
    /// Validation of the whole sequence happens before accumulation, so a
    /// failure never comes with partial totals. Empty input yields an all-zero
    /// result.
    ///
    /// # Errors
    ///
    /// Returns `SegmentationError::InvalidSample` for a non-finite time, a NaN,
    /// infinite, or negative rate, or a time smaller than its predecessor's
    pub fn classify(&self, samples: &[Sample]) -> Result<SegmentationResult, SegmentationError> {
        validate_sequence(samples)?;

        let mut acc = Accumulator::default();
        let mut previous_time: Option<f64> = None;

        for (index, sample) in samples.iter().enumerate() {
            let duration = match previous_time {
                Some(prev) => sample.time - prev,
                None => self.first_interval_duration(samples),
            };
            let state = ActivityState::from_rate(sample.rate, self.threshold);
            acc.push(index, state, sample.rate, duration);
            previous_time = Some(sample.time);
        }

        let result = acc.finish();
        debug!(
            samples = samples.len(),
            threshold = self.threshold,
            first_interval = %self.first_interval,
            fast_duration = result.fast_duration(),
            slow_duration = result.slow_duration(),
            fast_segments = result.fast_segment_count(),
            "Classified run/walk segments"
        );
        Ok(result)
    }

    fn first_interval_duration(&self, samples: &[Sample]) -> f64 {
        match self.first_interval {
            FirstIntervalPolicy::UnitDuration => FIRST_INTERVAL_SECONDS,
            FirstIntervalPolicy::Zero => 0.0,
            FirstIntervalPolicy::MirrorNext => match samples {
                [first, second, ..] => second.time - first.time,
                _ => FIRST_INTERVAL_SECONDS,
            },
        }
    }
}

/// Classify `samples` against `threshold` with the default one-unit first interval
///
/// # Errors
///
/// Returns `SegmentationError::InvalidConfiguration` for a negative or
/// non-finite threshold and `SegmentationError::InvalidSample` for malformed
/// samples
pub fn classify(samples: &[Sample], threshold: f64) -> Result<SegmentationResult, SegmentationError> {
    SegmentClassifier::new(threshold)?.classify(samples)
}
