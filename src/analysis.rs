// ABOUTME: Activity analysis service turning decoded streams into run/walk reports
// ABOUTME: Maps results to no-data, analyzed, or generic failure outcomes for presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

//! # Activity Analysis
//!
//! The presentation layer never shows zeroed statistics for bad input. It
//! receives an [`AnalysisOutcome`] that separates "the activity has no stream
//! data" from "the data could not be analyzed"; the latter always carries the
//! same generic message while the underlying error goes to the log.

use serde::{Deserialize, Serialize};
use stride_core::constants::messages;
use stride_core::errors::{AppError, AppResult};
use stride_core::formatters::{duration_to_clock, pace_from_rate};
use stride_core::models::{Sample, StreamSet};
use stride_intelligence::{
    classify_batch, pace_series, PacePoint, Segment, SegmentClassifier, SegmentationConfig,
    SegmentationResult,
};
use tracing::{debug, info, warn};

use crate::config::AnalyticsConfig;

/// Run/walk statistics ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunWalkReport {
    /// Running time, e.g. `"12m 30s"`
    pub total_running_time: String,
    /// Walking time, e.g. `"3m 05s"`
    pub total_walking_time: String,
    /// Average running pace per kilometer, `"--:--"` without running
    pub avg_running_pace: String,
    /// Number of separate running stretches
    pub running_segment_count: usize,
    /// Running time in seconds
    pub running_seconds: f64,
    /// Walking time in seconds
    pub walking_seconds: f64,
    /// Distance-weighted average running speed (m/s)
    pub avg_running_rate_mps: f64,
    /// Segment boundaries in sample order
    pub segments: Vec<Segment>,
}

impl From<&SegmentationResult> for RunWalkReport {
    fn from(result: &SegmentationResult) -> Self {
        Self {
            total_running_time: duration_to_clock(result.fast_duration()),
            total_walking_time: duration_to_clock(result.slow_duration()),
            avg_running_pace: pace_from_rate(result.average_fast_rate()),
            running_segment_count: result.fast_segment_count(),
            running_seconds: result.fast_duration(),
            walking_seconds: result.slow_duration(),
            avg_running_rate_mps: result.average_fast_rate(),
            segments: result.segments().to_vec(),
        }
    }
}

/// What the presentation layer should show for one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// No samples: a valid, empty analysis
    NoData {
        /// Message to display
        message: String,
    },
    /// Samples were classified
    Analyzed {
        /// Statistics to display
        report: RunWalkReport,
    },
    /// Input or configuration was rejected
    Failed {
        /// Generic message to display
        message: String,
    },
}

impl AnalysisOutcome {
    /// Map a classification result, logging the error behind a failure
    #[must_use]
    pub fn from_result(result: AppResult<SegmentationResult>) -> Self {
        match result {
            Ok(result) if result.is_empty() => Self::no_data(),
            Ok(result) => Self::Analyzed {
                report: RunWalkReport::from(&result),
            },
            Err(e) => {
                warn!(error = %e, code = ?e.code, "Activity analysis failed");
                Self::failed()
            }
        }
    }

    fn no_data() -> Self {
        Self::NoData {
            message: messages::NO_DATA.to_owned(),
        }
    }

    fn failed() -> Self {
        Self::Failed {
            message: messages::ANALYSIS_FAILED.to_owned(),
        }
    }

    /// Whether analysis was rejected
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Classifies decoded activity streams with one fixed configuration
#[derive(Debug, Clone, Copy)]
pub struct ActivityAnalyzer {
    classifier: SegmentClassifier,
    config: SegmentationConfig,
}

impl ActivityAnalyzer {
    /// Create an analyzer from a segmentation configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the threshold is unusable
    pub fn new(config: SegmentationConfig) -> AppResult<Self> {
        let classifier = SegmentClassifier::from_config(&config)?;
        Ok(Self { classifier, config })
    }

    /// Create an analyzer from the environment with command-line overrides applied
    ///
    /// A rejected environment variable or override comes back as a
    /// `ConfigInvalid` error, presented like any other failed analysis.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a value does not parse or validate
    pub fn from_env_with_overrides(
        threshold_mps: Option<f64>,
        pace_cap_min_per_km: Option<f64>,
    ) -> AppResult<Self> {
        let config =
            AnalyticsConfig::from_env()?.with_overrides(threshold_mps, pace_cap_min_per_km)?;
        debug!(segmentation = ?config.segmentation, "Configuration loaded");
        Self::new(config.segmentation)
    }

    /// Classifier used for every activity
    #[must_use]
    pub const fn classifier(&self) -> &SegmentClassifier {
        &self.classifier
    }

    /// Classify one activity's streams, surfacing the error on bad data
    ///
    /// Streams with neither time nor velocity points yield an empty result.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the streams are missing, mismatched,
    /// or contain malformed samples
    pub fn classify_streams(&self, streams: &StreamSet) -> AppResult<SegmentationResult> {
        Ok(self.classifier.classify(&Self::samples(streams)?)?)
    }

    /// Analyze one activity for display
    #[must_use]
    pub fn analyze(&self, streams: &StreamSet) -> AnalysisOutcome {
        let outcome = AnalysisOutcome::from_result(self.classify_streams(streams));
        if let AnalysisOutcome::Analyzed { report } = &outcome {
            info!(
                running_seconds = report.running_seconds,
                walking_seconds = report.walking_seconds,
                running_segments = report.running_segment_count,
                "Activity analyzed"
            );
        }
        outcome
    }

    /// Analyze many activities, classifying in parallel across activities
    ///
    /// Outcomes are returned in input order.
    #[must_use]
    pub fn analyze_many(&self, activities: &[StreamSet]) -> Vec<AnalysisOutcome> {
        let decoded: Vec<AppResult<Vec<Sample>>> = activities.iter().map(Self::samples).collect();
        let valid: Vec<&[Sample]> = decoded
            .iter()
            .filter_map(|d| d.as_ref().ok().map(Vec::as_slice))
            .collect();
        let mut classified = classify_batch(&self.classifier, &valid).into_iter();

        decoded
            .into_iter()
            .map(|samples| {
                let result = match samples {
                    Ok(_) => classified
                        .next()
                        .ok_or_else(|| AppError::internal("batch result missing"))
                        .and_then(|r| r.map_err(AppError::from)),
                    Err(e) => Err(e),
                };
                AnalysisOutcome::from_result(result)
            })
            .collect()
    }

    /// Capped pace chart series for one activity
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for malformed streams
    pub fn pace_chart(&self, streams: &StreamSet) -> AppResult<Vec<PacePoint>> {
        Ok(pace_series(
            &Self::samples(streams)?,
            self.config.pace_chart_cap_min_per_km,
        )?)
    }

    fn samples(streams: &StreamSet) -> AppResult<Vec<Sample>> {
        if streams.is_empty() {
            return Ok(Vec::new());
        }
        Ok(streams.samples()?)
    }
}
