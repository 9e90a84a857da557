// ABOUTME: Parallel classification of many activities with rayon
// ABOUTME: Parallelizes across activities only; results stay in input order and independent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use rayon::prelude::*;
use stride_core::errors::SegmentationError;
use stride_core::models::Sample;
use tracing::debug;

use crate::segmentation::{SegmentClassifier, SegmentationResult};

/// Classify each activity's samples on the rayon pool.
///
/// One activity's failure does not affect the others; the returned vector has
/// one entry per input, in input order.
pub fn classify_batch<S>(
    classifier: &SegmentClassifier,
    activities: &[S],
) -> Vec<Result<SegmentationResult, SegmentationError>>
where
    S: AsRef<[Sample]> + Sync,
{
    let results: Vec<_> = activities
        .par_iter()
        .map(|samples| classifier.classify(samples.as_ref()))
        .collect();

    debug!(
        activities = activities.len(),
        failed = results.iter().filter(|r| r.is_err()).count(),
        "Classified activity batch"
    );
    results
}
