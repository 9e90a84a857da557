// ABOUTME: Integration tests for stream payload decoding
// ABOUTME: Covers keyed, list, and flat JSON shapes plus missing and malformed streams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use stride_analytics::errors::{ErrorCode, SegmentationError};
use stride_analytics::models::{Sample, StreamSet};

const KEYED: &str = r#"{
    "time": {"data": [0, 1, 2], "series_type": "distance", "original_size": 3, "resolution": "high"},
    "velocity_smooth": {"data": [1.0, 3.0, 1.5], "series_type": "distance"},
    "heartrate": {"data": [120, 150, 140]},
    "latlng": {"data": [[45.5, -73.6], [45.5, -73.6], [45.5, -73.6]]}
}"#;

const LIST: &str = r#"[
    {"type": "time", "data": [0, 1, 2], "series_type": "distance"},
    {"type": "velocity_smooth", "data": [1.0, 3.0, 1.5]},
    {"type": "altitude", "data": [10.0, 10.5, 11.0]}
]"#;

const FLAT: &str = r#"{
    "time": [0, 1, 2],
    "velocity_smooth": [1.0, 3.0, 1.5],
    "distance": [0.0, 3.0, 4.5],
    "latlng": [[45.5, -73.6], [45.5, -73.6], [45.5, -73.6]]
}"#;

fn expected_samples() -> Vec<Sample> {
    vec![
        Sample::new(0.0, 1.0),
        Sample::new(1.0, 3.0),
        Sample::new(2.0, 1.5),
    ]
}

#[test]
fn test_decode_keyed_shape() {
    common::init_test_logging();
    let streams = StreamSet::from_json(KEYED).unwrap();

    assert_eq!(streams.heartrate, Some(vec![120.0, 150.0, 140.0]));
    assert!(streams.distance.is_none());
    assert_eq!(streams.samples().unwrap(), expected_samples());
}

#[test]
fn test_decode_list_shape() {
    let streams = StreamSet::from_json(LIST).unwrap();

    assert_eq!(streams.altitude, Some(vec![10.0, 10.5, 11.0]));
    assert_eq!(streams.samples().unwrap(), expected_samples());
}

#[test]
fn test_decode_flat_shape() {
    let streams = StreamSet::from_json(FLAT).unwrap();

    assert_eq!(streams.distance, Some(vec![0.0, 3.0, 4.5]));
    assert_eq!(streams.samples().unwrap(), expected_samples());
}

#[test]
fn test_all_shapes_agree() {
    let keyed = StreamSet::from_json(KEYED).unwrap();
    let list = StreamSet::from_json(LIST).unwrap();
    let flat = StreamSet::from_json(FLAT).unwrap();

    assert_eq!(keyed.time, list.time);
    assert_eq!(list.velocity_smooth, flat.velocity_smooth);
}

#[test]
fn test_empty_object_is_empty() {
    let streams = StreamSet::from_json("{}").unwrap();
    assert!(streams.is_empty());

    let streams = StreamSet::from_json(r#"{"time": [], "velocity_smooth": []}"#).unwrap();
    assert!(streams.is_empty());
}

#[test]
fn test_missing_velocity_stream() {
    let streams = StreamSet::from_json(r#"{"time": [0, 1, 2]}"#).unwrap();

    assert!(!streams.is_empty());
    let err = streams.samples().unwrap_err();
    assert!(matches!(err, SegmentationError::InvalidSample { index: None, .. }));
}

#[test]
fn test_length_mismatch() {
    let streams =
        StreamSet::from_json(r#"{"time": [0, 1, 2], "velocity_smooth": [1.0, 2.0]}"#).unwrap();

    let err = streams.samples().unwrap_err();
    assert!(matches!(err, SegmentationError::InvalidSample { index: None, .. }));
}

#[test]
fn test_non_numeric_point() {
    let err = StreamSet::from_json(r#"{"time": [0, "one", 2]}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("index 1"), "message: {}", err.message);
}

#[test]
fn test_unrecognized_payload() {
    let err = StreamSet::from_json(r#""not a stream payload""#).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_decoded_samples_reject_decreasing_time() {
    let streams =
        StreamSet::from_json(r#"{"time": [0, 2, 1], "velocity_smooth": [1.0, 1.0, 1.0]}"#)
            .unwrap();

    let err = streams.samples().unwrap_err();
    assert!(matches!(
        err,
        SegmentationError::InvalidSample { index: Some(2), .. }
    ));
}
