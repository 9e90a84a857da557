// ABOUTME: Pace-over-time series for charting, derived from velocity samples
// ABOUTME: Converts m/s to min/km and caps slow readings to suppress GPS noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use serde::{Deserialize, Serialize};
use stride_core::constants::units::{METERS_PER_KM, SECONDS_PER_MINUTE};
use stride_core::errors::SegmentationError;
use stride_core::models::{validate_sequence, Sample};

/// One plotted point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PacePoint {
    /// Seconds since activity start
    pub time: f64,
    /// Pace in minutes per kilometer, at most the chart cap
    pub pace_min_per_km: f64,
}

/// Convert samples to a capped pace series
///
/// Stationary samples (rate 0) are drawn at the cap.
///
/// # Errors
///
/// Returns `SegmentationError::InvalidConfiguration` if `cap_min_per_km` is not
/// strictly positive, and `SegmentationError::InvalidSample` for malformed samples
pub fn pace_series(
    samples: &[Sample],
    cap_min_per_km: f64,
) -> Result<Vec<PacePoint>, SegmentationError> {
    if !cap_min_per_km.is_finite() || cap_min_per_km <= 0.0 {
        return Err(SegmentationError::invalid_configuration(format!(
            "pace chart cap {cap_min_per_km} min/km must be > 0"
        )));
    }
    validate_sequence(samples)?;

    Ok(samples
        .iter()
        .map(|sample| PacePoint {
            time: sample.time,
            pace_min_per_km: if sample.rate > 0.0 {
                (METERS_PER_KM / sample.rate / SECONDS_PER_MINUTE).min(cap_min_per_km)
            } else {
                cap_min_per_km
            },
        })
        .collect())
}
