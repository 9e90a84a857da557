// ABOUTME: Core data models for activities, stream payloads, and classifier samples
// ABOUTME: Re-exports the commonly used model types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

/// Activity summary listings
pub mod activity;
/// Validated classifier input samples
pub mod sample;
/// Per-metric stream payload decoding
pub mod stream;

pub use activity::ActivitySummary;
pub use sample::{validate_sequence, zip_samples, Sample};
pub use stream::{RawStream, StreamSet};
