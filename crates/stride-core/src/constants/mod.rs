// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, classifier defaults, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Unit conversion and measurement constants
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
    /// Meters in one statute mile
    pub const METERS_PER_MILE: f64 = 1609.34;
    /// Miles per meter, as used by the weekly distance chart
    pub const MILES_PER_METER: f64 = 0.000_621_371;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: u64 = 3600;
}

/// Default parameters for run/walk segmentation
pub mod segmentation {
    /// Rate at or above which an interval counts as running (m/s, about 7:34/km)
    pub const DEFAULT_RUNNING_THRESHOLD_MPS: f64 = 2.2;
    /// Duration assigned to the synthetic interval in front of the first sample
    pub const FIRST_INTERVAL_SECONDS: f64 = 1.0;
    /// Slowest pace drawn on the pace chart; slower readings are GPS noise
    pub const DEFAULT_PACE_CHART_CAP_MIN_PER_KM: f64 = 15.0;
}

/// Stream keys in the remote fitness API's stream payload
pub mod stream_keys {
    /// Elapsed seconds since activity start
    pub const TIME: &str = "time";
    /// Cumulative distance in meters
    pub const DISTANCE: &str = "distance";
    /// Smoothed instantaneous speed in m/s
    pub const VELOCITY_SMOOTH: &str = "velocity_smooth";
    /// Heart rate in BPM
    pub const HEARTRATE: &str = "heartrate";
    /// Altitude in meters
    pub const ALTITUDE: &str = "altitude";
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name reported by the logging layer
    pub const STRIDE_ANALYTICS: &str = "stride-analytics";
}

/// User-facing messages
pub mod messages {
    /// Shown instead of zeroed stats when analysis failed on bad data or configuration
    pub const ANALYSIS_FAILED: &str = "Could not analyze activity";
    /// Shown when the activity carries no samples at all
    pub const NO_DATA: &str = "No stream data available";
}
