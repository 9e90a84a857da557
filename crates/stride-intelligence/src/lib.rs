// ABOUTME: Run/walk segmentation engine and supporting analysis for Stride
// ABOUTME: Classifier, configuration, pace chart series, batch runs, and weekly totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Pure computations over decoded activity data. Nothing in this crate
//! performs I/O; every function reads its inputs and returns a fresh value.

/// Parallel classification across activities
pub mod batch;
/// Segmentation parameters and environment overrides
pub mod config;
/// Pace chart series
pub mod pace_series;
/// The run/walk segment classifier
pub mod segmentation;
/// Weekly distance aggregation
pub mod weekly;

pub use batch::classify_batch;
pub use config::{ConfigError, FirstIntervalPolicy, SegmentationConfig};
pub use pace_series::{pace_series, PacePoint};
pub use segmentation::{classify, ActivityState, Segment, SegmentClassifier, SegmentationResult};
pub use weekly::{week_start, weekly_distance, WeeklyDistance};
