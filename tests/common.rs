// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet logging setup and sample and stream builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `stride_analytics`

use std::env;
use std::sync::Once;

use stride_analytics::models::{Sample, StreamSet};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build samples from `(time, rate)` pairs
pub fn samples(points: &[(f64, f64)]) -> Vec<Sample> {
    points
        .iter()
        .map(|&(time, rate)| Sample::new(time, rate))
        .collect()
}

/// Samples one second apart starting at zero
pub fn evenly_spaced(rates: &[f64]) -> Vec<Sample> {
    rates
        .iter()
        .enumerate()
        .map(|(i, &rate)| Sample::new(i as f64, rate))
        .collect()
}

/// Walk, jog, walk: two slow seconds, two fast seconds, one slow second
pub fn run_walk_example() -> Vec<Sample> {
    evenly_spaced(&[1.0, 1.0, 3.0, 3.0, 1.0])
}

/// Stream set holding only time and velocity
pub fn stream_set(times: &[f64], rates: &[f64]) -> StreamSet {
    StreamSet {
        time: Some(times.to_vec()),
        velocity_smooth: Some(rates.to_vec()),
        ..StreamSet::default()
    }
}

/// Compare floats accumulated by summation
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
