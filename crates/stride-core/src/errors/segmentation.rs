// ABOUTME: Error taxonomy for run/walk segment classification
// ABOUTME: Separates bad classifier configuration from malformed sample input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use thiserror::Error;

/// Validation failures raised before any accumulation begins.
///
/// Both variants are local to one classification call. Nothing is retried and
/// no partial result accompanies them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentationError {
    /// The classifier was configured with an unusable value (e.g. a negative threshold)
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What is wrong with the configuration
        reason: String,
    },

    /// A sample, or the stream it came from, is malformed
    #[error("{}", describe_sample(*index, reason))]
    InvalidSample {
        /// Offending sample index, `None` for stream-level problems
        index: Option<usize>,
        /// What is wrong with the sample
        reason: String,
    },
}

fn describe_sample(index: Option<usize>, reason: &str) -> String {
    index.map_or_else(
        || format!("Invalid sample stream: {reason}"),
        |i| format!("Invalid sample at index {i}: {reason}"),
    )
}

impl SegmentationError {
    /// Create an "invalid configuration" error
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an "invalid sample" error pointing at one sample
    #[must_use]
    pub fn invalid_sample(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSample {
            index: Some(index),
            reason: reason.into(),
        }
    }

    /// Create an "invalid sample" error for the stream as a whole
    #[must_use]
    pub fn invalid_stream(reason: impl Into<String>) -> Self {
        Self::InvalidSample {
            index: None,
            reason: reason.into(),
        }
    }

    /// Whether the caller handed in bad data, as opposed to a bad configuration
    #[must_use]
    pub const fn is_bad_data(&self) -> bool {
        matches!(self, Self::InvalidSample { .. })
    }
}
