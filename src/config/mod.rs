// ABOUTME: Configuration module for the analytics service and CLI
// ABOUTME: Combines logging and segmentation settings loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

/// Environment-based configuration loading
pub mod environment;

pub use environment::AnalyticsConfig;
pub use stride_intelligence::config::{ConfigError, FirstIntervalPolicy, SegmentationConfig};
