// ABOUTME: Integration tests for parallel batch classification
// ABOUTME: Confirms input-order results and per-activity error isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{evenly_spaced, run_walk_example, samples};
use stride_analytics::errors::SegmentationError;
use stride_analytics::intelligence::{classify_batch, SegmentClassifier};
use stride_analytics::models::Sample;

#[test]
fn test_batch_matches_sequential() {
    common::init_test_logging();
    let classifier = SegmentClassifier::new(2.2).unwrap();
    let activities: Vec<Vec<Sample>> = (1..=64_u32)
        .map(|n| evenly_spaced(&(0..n).map(|i| f64::from(i % 5)).collect::<Vec<_>>()))
        .collect();

    let batch = classify_batch(&classifier, &activities);

    assert_eq!(batch.len(), activities.len());
    for (samples, result) in activities.iter().zip(&batch) {
        assert_eq!(result.as_ref().unwrap(), &classifier.classify(samples).unwrap());
    }
}

#[test]
fn test_batch_isolates_failures() {
    let classifier = SegmentClassifier::new(2.2).unwrap();
    let activities = vec![
        run_walk_example(),
        samples(&[(0.0, 1.0), (1.0, f64::NAN)]),
        Vec::new(),
    ];

    let batch = classify_batch(&classifier, &activities);

    assert_eq!(batch[0].as_ref().unwrap().fast_duration(), 2.0);
    assert!(matches!(
        batch[1],
        Err(SegmentationError::InvalidSample { index: Some(1), .. })
    ));
    assert!(batch[2].as_ref().unwrap().is_empty());
}

#[test]
fn test_batch_accepts_slices() {
    let classifier = SegmentClassifier::new(2.2).unwrap();
    let first = run_walk_example();
    let second = evenly_spaced(&[5.0]);
    let activities = vec![first.as_slice(), second.as_slice()];

    let batch = classify_batch(&classifier, &activities);
    assert_eq!(batch[1].as_ref().unwrap().fast_segment_count(), 1);
}
