// ABOUTME: Activity summary model as listed by the fitness API and the local cache
// ABOUTME: Carries distance, timing, speed, and heart rate fields used for aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one recorded activity
///
/// Field names follow the remote API's JSON so listings decode directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Provider activity identifier
    pub id: u64,
    /// Human-readable title
    #[serde(default)]
    pub name: String,
    /// Total distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: u64,
    /// Elapsed wall-clock time in seconds
    #[serde(default)]
    pub elapsed_time: u64,
    /// Elevation gained in meters
    #[serde(default)]
    pub total_elevation_gain: f64,
    /// Sport type as reported by the provider (`Run`, `Walk`, ...)
    #[serde(rename = "type", default)]
    pub sport_type: String,
    /// When the activity started (UTC)
    pub start_date: DateTime<Utc>,
    /// Average speed in m/s
    #[serde(default)]
    pub average_speed: f64,
    /// Maximum speed in m/s
    #[serde(default)]
    pub max_speed: f64,
    /// Average heart rate in BPM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_heartrate: Option<f64>,
    /// Maximum heart rate in BPM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heartrate: Option<f64>,
}

impl ActivitySummary {
    /// Whether the provider classified this activity as a run
    #[must_use]
    pub fn is_run(&self) -> bool {
        self.sport_type.eq_ignore_ascii_case("run")
    }
}
