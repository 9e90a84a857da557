// ABOUTME: Criterion benchmarks for run/walk segmentation
// ABOUTME: Measures single-activity classification, batch classification, and stream decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

//! Criterion benchmarks for the segment classifier.
//!
//! Activities are synthetic one-hertz interval sessions: alternating jog and
//! walk blocks with small speed jitter.

#![allow(clippy::missing_docs_in_private_items, clippy::expect_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use stride_analytics::intelligence::{classify_batch, SegmentClassifier};
use stride_analytics::models::{Sample, StreamSet};

/// Samples per synthetic activity for the batch benchmark (one hour at 1 Hz)
const HOUR_OF_SAMPLES: usize = 3600;

/// Generate an interval session: 90 s jogging, 60 s walking, repeated
fn generate_session(len: usize) -> Vec<Sample> {
    (0..len)
        .map(|index| {
            let jitter = ((index * 37) % 10) as f64 / 20.0;
            let rate = if index % 150 < 90 {
                2.8 + jitter
            } else {
                1.2 + jitter
            };
            Sample::new(index as f64, rate)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = SegmentClassifier::new(2.2).expect("valid threshold");

    for len in [600, 3600, 14_400] {
        let samples = generate_session(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("samples", len), &samples, |b, samples| {
            b.iter(|| classifier.classify(black_box(samples)));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let classifier = SegmentClassifier::new(2.2).expect("valid threshold");

    for count in [10, 100] {
        let activities: Vec<Vec<Sample>> =
            (0..count).map(|_| generate_session(HOUR_OF_SAMPLES)).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("activities", count),
            &activities,
            |b, activities| {
                b.iter(|| classify_batch(&classifier, black_box(activities)));
            },
        );
    }

    group.finish();
}

fn bench_stream_decoding(c: &mut Criterion) {
    let samples = generate_session(HOUR_OF_SAMPLES);
    let payload = json!({
        "time": {"data": samples.iter().map(|s| s.time).collect::<Vec<_>>()},
        "velocity_smooth": {"data": samples.iter().map(|s| s.rate).collect::<Vec<_>>()},
    })
    .to_string();

    c.bench_function("decode_keyed_streams_1h", |b| {
        b.iter(|| StreamSet::from_json(black_box(&payload)));
    });
}

criterion_group!(benches, bench_classify, bench_batch, bench_stream_decoding);
criterion_main!(benches);
