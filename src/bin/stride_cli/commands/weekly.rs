// ABOUTME: Weekly distance subcommand for stride-cli
// ABOUTME: Groups an activity listing into Sunday-start weeks and prints the totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use stride_analytics::errors::AppResult;
use stride_analytics::intelligence::weekly_distance;
use stride_analytics::models::ActivitySummary;
use tracing::debug;

use crate::helpers::display;

fn load_activities(path: &Path) -> AppResult<Vec<ActivitySummary>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Print weekly distance totals for an activity listing
pub fn run(path: &Path, runs_only: bool, json: bool) -> Result<ExitCode> {
    let mut activities = load_activities(path)?;

    if runs_only {
        activities.retain(ActivitySummary::is_run);
    }
    debug!(count = activities.len(), runs_only, "Grouping activities by week");

    let weeks = weekly_distance(&activities);
    if json {
        println!("{}", serde_json::to_string_pretty(&weeks)?);
    } else {
        display::display_weeks(&weeks);
    }
    Ok(ExitCode::SUCCESS)
}
