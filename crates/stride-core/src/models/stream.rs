// ABOUTME: Decoding of the fitness API's per-metric stream payloads into parallel arrays
// ABOUTME: Accepts keyed-by-type, list, and flat cached shapes and zips time with velocity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::sample::{zip_samples, Sample};
use crate::constants::stream_keys;
use crate::errors::{AppResult, SegmentationError};

/// One metric stream as the remote API returns it
#[derive(Debug, Clone, Deserialize)]
pub struct RawStream {
    /// Metric name; present in the list shape, implied by the key otherwise
    #[serde(rename = "type", default)]
    pub stream_type: Option<String>,
    /// Data points, indexed in parallel with every other stream
    pub data: Vec<Value>,
    /// Stream the points are indexed by (`time` or `distance`)
    #[serde(default)]
    pub series_type: Option<String>,
    /// Point count before any downsampling
    #[serde(default)]
    pub original_size: Option<usize>,
    /// Downsampling level (`low`, `medium`, `high`)
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Shapes the stream endpoint and the local cache produce
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StreamPayload {
    /// `key_by_type=true`: `{"time": {"data": [...]}, ...}`
    Keyed(HashMap<String, RawStream>),
    /// Default endpoint shape: `[{"type": "time", "data": [...]}, ...]`
    List(Vec<RawStream>),
    /// Cached form with the wrapper stripped: `{"time": [...], ...}`
    Flat(HashMap<String, Vec<Value>>),
}

/// Time-series streams for one activity, decoded into numeric arrays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamSet {
    /// Seconds since activity start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Vec<f64>>,
    /// Cumulative distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Vec<f64>>,
    /// Smoothed speed in m/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_smooth: Option<Vec<f64>>,
    /// Heart rate in BPM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartrate: Option<Vec<f64>>,
    /// Altitude in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<Vec<f64>>,
}

impl StreamSet {
    /// Decode a stream payload in any of the supported shapes.
    ///
    /// Streams other than time, distance, velocity, heart rate, and altitude
    /// (e.g. `latlng`) are ignored.
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the JSON matches no known shape, and
    /// an invalid-input error when a recognized stream holds non-numeric points.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let payload: StreamPayload = serde_json::from_str(json)?;
        let columns: Vec<(String, Vec<Value>)> = match payload {
            StreamPayload::Keyed(map) => map
                .into_iter()
                .map(|(key, stream)| (stream.stream_type.unwrap_or(key), stream.data))
                .collect(),
            StreamPayload::List(list) => list
                .into_iter()
                .filter_map(|stream| stream.stream_type.map(|key| (key, stream.data)))
                .collect(),
            StreamPayload::Flat(map) => map.into_iter().collect(),
        };

        let mut set = Self::default();
        for (key, data) in columns {
            let slot = match key.as_str() {
                stream_keys::TIME => &mut set.time,
                stream_keys::DISTANCE => &mut set.distance,
                stream_keys::VELOCITY_SMOOTH => &mut set.velocity_smooth,
                stream_keys::HEARTRATE => &mut set.heartrate,
                stream_keys::ALTITUDE => &mut set.altitude,
                other => {
                    debug!(stream = other, "Ignoring unsupported stream");
                    continue;
                }
            };
            *slot = Some(numeric_points(&key, &data)?);
        }
        Ok(set)
    }

    /// Whether neither the time nor the velocity stream carries any point
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.as_ref().is_none_or(Vec::is_empty)
            && self.velocity_smooth.as_ref().is_none_or(Vec::is_empty)
    }

    /// Zip the time and velocity streams into validated samples
    ///
    /// # Errors
    ///
    /// Returns `SegmentationError::InvalidSample` when either stream is missing,
    /// the streams differ in length, or a sample is malformed.
    pub fn samples(&self) -> Result<Vec<Sample>, SegmentationError> {
        let times = self
            .time
            .as_deref()
            .ok_or_else(|| SegmentationError::invalid_stream("missing time stream"))?;
        let rates = self
            .velocity_smooth
            .as_deref()
            .ok_or_else(|| SegmentationError::invalid_stream("missing velocity_smooth stream"))?;
        zip_samples(times, rates)
    }
}

fn numeric_points(key: &str, data: &[Value]) -> Result<Vec<f64>, SegmentationError> {
    data.iter()
        .enumerate()
        .map(|(index, value)| {
            value.as_f64().ok_or_else(|| {
                SegmentationError::invalid_sample(
                    index,
                    format!("{key} stream point {value} is not numeric"),
                )
            })
        })
        .collect()
}
