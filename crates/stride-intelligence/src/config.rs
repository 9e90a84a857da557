// ABOUTME: Environment-configurable parameters for run/walk segmentation
// ABOUTME: Threshold, first-interval policy, and pace chart cap with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

//! Segmentation Configuration
//!
//! Defaults match the dashboard run/walk analysis. Every value can be
//! overridden through `STRIDE_*` environment variables; overrides are
//! validated before use.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stride_core::constants::segmentation::{
    DEFAULT_PACE_CHART_CAP_MIN_PER_KM, DEFAULT_RUNNING_THRESHOLD_MPS,
};
use stride_core::errors::AppError;
use thiserror::Error;

/// Environment variable overriding the running threshold (m/s)
pub const ENV_RUNNING_THRESHOLD: &str = "STRIDE_RUNNING_THRESHOLD_MPS";
/// Environment variable selecting the first-interval policy
pub const ENV_FIRST_INTERVAL_POLICY: &str = "STRIDE_FIRST_INTERVAL_POLICY";
/// Environment variable overriding the pace chart cap (min/km)
pub const ENV_PACE_CHART_CAP: &str = "STRIDE_PACE_CHART_CAP_MIN_PER_KM";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable holds a value that does not parse
    #[error("Failed to parse {key}={value}")]
    Parse {
        /// Variable name
        key: &'static str,
        /// Raw value found in the environment
        value: String,
    },

    /// Environment variable is set but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Parsed value fails validation
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}

/// Duration given to the synthetic interval in front of the first sample
///
/// The first sample has no predecessor, so its interval length is a policy
/// decision. [`FirstIntervalPolicy::UnitDuration`] keeps totals identical to
/// the dashboard figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstIntervalPolicy {
    /// Exactly one time unit
    #[default]
    UnitDuration,
    /// Zero width; the first sample contributes nothing
    Zero,
    /// Same length as the second interval, one unit for single-sample input
    MirrorNext,
}

impl FirstIntervalPolicy {
    /// Policy name as accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnitDuration => "unit",
            Self::Zero => "zero",
            Self::MirrorNext => "mirror_next",
        }
    }
}

impl fmt::Display for FirstIntervalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FirstIntervalPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unit" | "unit_duration" => Ok(Self::UnitDuration),
            "zero" => Ok(Self::Zero),
            "mirror_next" | "mirror" => Ok(Self::MirrorNext),
            _ => Err(ConfigError::Parse {
                key: ENV_FIRST_INTERVAL_POLICY,
                value: s.to_owned(),
            }),
        }
    }
}

/// Parameters for one classification run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Rate at or above which an interval is running (m/s)
    pub running_threshold_mps: f64,
    /// Duration policy for the first sample's interval
    pub first_interval: FirstIntervalPolicy,
    /// Slowest pace plotted on the pace chart (min/km)
    pub pace_chart_cap_min_per_km: f64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            running_threshold_mps: DEFAULT_RUNNING_THRESHOLD_MPS,
            first_interval: FirstIntervalPolicy::default(),
            pace_chart_cap_min_per_km: DEFAULT_PACE_CHART_CAP_MIN_PER_KM,
        }
    }
}

impl SegmentationConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable does not parse or the result fails validation
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(val) = read_env(ENV_RUNNING_THRESHOLD)? {
            config.running_threshold_mps = parse_f64(ENV_RUNNING_THRESHOLD, &val)?;
        }

        if let Some(val) = read_env(ENV_FIRST_INTERVAL_POLICY)? {
            config.first_interval = val.parse()?;
        }

        if let Some(val) = read_env(ENV_PACE_CHART_CAP)? {
            config.pace_chart_cap_min_per_km = parse_f64(ENV_PACE_CHART_CAP, &val)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative or non-finite, or the pace
    /// cap is not strictly positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.running_threshold_mps.is_finite() || self.running_threshold_mps < 0.0 {
            return Err(ConfigError::ValidationFailed(format!(
                "running_threshold_mps must be a non-negative number, got {}",
                self.running_threshold_mps
            )));
        }

        if !self.pace_chart_cap_min_per_km.is_finite() || self.pace_chart_cap_min_per_km <= 0.0 {
            return Err(ConfigError::ValidationFailed(format!(
                "pace_chart_cap_min_per_km must be > 0, got {}",
                self.pace_chart_cap_min_per_km
            )));
        }

        Ok(())
    }
}

fn read_env(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_f64(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        value: value.to_owned(),
    })
}
