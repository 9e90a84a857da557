// ABOUTME: Environment-first configuration for the analytics surface
// ABOUTME: Loads logging and segmentation settings and applies command-line overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

//! Environment-only configuration approach: every setting has a default, an
//! environment variable, and optionally a command-line flag that wins over both.

use stride_intelligence::config::{ConfigError, SegmentationConfig};
use tracing::debug;

use crate::logging::LoggingConfig;

/// Complete configuration for one run of the analytics surface
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Classifier and chart parameters
    pub segmentation: SegmentationConfig,
}

impl AnalyticsConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a segmentation variable does not parse or validate
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            logging: LoggingConfig::from_env(),
            segmentation: SegmentationConfig::from_environment()?,
        })
    }

    /// Apply command-line overrides on top of the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an override produces an invalid configuration
    pub fn with_overrides(
        mut self,
        threshold_mps: Option<f64>,
        pace_cap_min_per_km: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(threshold) = threshold_mps {
            debug!(threshold, "Overriding running threshold from command line");
            self.segmentation.running_threshold_mps = threshold;
        }
        if let Some(cap) = pace_cap_min_per_km {
            debug!(cap, "Overriding pace chart cap from command line");
            self.segmentation.pace_chart_cap_min_per_km = cap;
        }
        self.segmentation.validate()?;
        Ok(self)
    }
}
