// ABOUTME: Stream-based subcommands for stride-cli
// ABOUTME: Prints the run/walk report or the pace chart series for one activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use stride_analytics::analysis::{ActivityAnalyzer, AnalysisOutcome};
use stride_analytics::errors::AppResult;
use stride_analytics::models::StreamSet;

use crate::helpers::display;

fn load_streams(path: &Path) -> AppResult<StreamSet> {
    let raw = fs::read_to_string(path)?;
    StreamSet::from_json(&raw)
}

const fn exit_code(outcome: &AnalysisOutcome) -> ExitCode {
    if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Classify one activity and print its run/walk report
pub fn run(path: &Path, threshold: Option<f64>, json: bool) -> Result<ExitCode> {
    let loaded = ActivityAnalyzer::from_env_with_overrides(threshold, None)
        .and_then(|analyzer| Ok((analyzer, load_streams(path)?)));
    let outcome = match loaded {
        Ok((analyzer, streams)) => analyzer.analyze(&streams),
        Err(e) => AnalysisOutcome::from_result(Err(e)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display::display_outcome(&outcome);
    }
    Ok(exit_code(&outcome))
}

/// Print the capped pace chart series as JSON
///
/// A failure prints the failed outcome instead of a series.
pub fn pace_series(path: &Path, cap: Option<f64>) -> Result<ExitCode> {
    let series = ActivityAnalyzer::from_env_with_overrides(None, cap).and_then(|analyzer| {
        let streams = load_streams(path)?;
        analyzer.pace_chart(&streams)
    });

    match series {
        Ok(points) => {
            println!("{}", serde_json::to_string_pretty(&points)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let outcome = AnalysisOutcome::from_result(Err(e));
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(exit_code(&outcome))
        }
    }
}
