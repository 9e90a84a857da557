// ABOUTME: Main library entry point for Stride running analytics
// ABOUTME: Re-exports the core and intelligence crates and hosts logging, config, and analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

#![deny(unsafe_code)]

//! # Stride Analytics
//!
//! Personal running analytics over activity streams pulled from a fitness
//! API. The heart of the crate is the run/walk segment classifier: given a
//! velocity time series and a threshold it splits the activity into running
//! and walking segments and reports time in each, the average running pace,
//! and the number of running stretches.
//!
//! ## Architecture
//!
//! - **`stride-core`**: errors, constants, models, formatters
//! - **`stride-intelligence`**: classifier, configuration, pace series,
//!   batch classification, weekly totals
//! - **this crate**: logging, environment configuration, and the analysis
//!   service used by the `stride-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use stride_analytics::analysis::{ActivityAnalyzer, AnalysisOutcome};
//! use stride_analytics::config::SegmentationConfig;
//! use stride_analytics::errors::AppResult;
//! use stride_analytics::models::StreamSet;
//!
//! fn main() -> AppResult<()> {
//!     let streams = StreamSet::from_json(
//!         r#"{"time": [0, 1, 2, 3], "velocity_smooth": [1.0, 3.0, 3.0, 1.0]}"#,
//!     )?;
//!     let analyzer = ActivityAnalyzer::new(SegmentationConfig::default())?;
//!
//!     match analyzer.analyze(&streams) {
//!         AnalysisOutcome::Analyzed { report } => {
//!             assert_eq!(report.running_segment_count, 1);
//!         }
//!         other => panic!("unexpected outcome: {other:?}"),
//!     }
//!     Ok(())
//! }
//! ```

/// Activity analysis service and presentation outcomes
pub mod analysis;

/// Environment configuration for logging and segmentation
pub mod config;

/// Structured logging setup
pub mod logging;

pub use stride_core::{constants, errors, formatters, models};
pub use stride_intelligence as intelligence;
