// ABOUTME: Output formatting helpers for stride-cli
// ABOUTME: Prints run/walk reports and weekly totals as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use stride_analytics::analysis::{AnalysisOutcome, RunWalkReport};
use stride_analytics::formatters::{format_distance_km, pace_per_mile};
use stride_analytics::intelligence::WeeklyDistance;

/// Print whatever the outcome says to show
pub fn display_outcome(outcome: &AnalysisOutcome) {
    match outcome {
        AnalysisOutcome::Analyzed { report } => display_report(report),
        AnalysisOutcome::NoData { message } | AnalysisOutcome::Failed { message } => {
            println!("{message}");
        }
    }
}

fn display_report(report: &RunWalkReport) {
    println!("Run/Walk Analysis");
    println!("{}", "=".repeat(40));
    println!("   Running time:     {}", report.total_running_time);
    println!("   Walking time:     {}", report.total_walking_time);
    println!("   Avg running pace: {} /km", report.avg_running_pace);
    println!(
        "   Avg running pace: {} /mi",
        pace_per_mile(report.avg_running_rate_mps)
    );
    println!("   Running segments: {}", report.running_segment_count);
}

/// Print one line per week
pub fn display_weeks(weeks: &[WeeklyDistance]) {
    if weeks.is_empty() {
        println!("No activities");
        return;
    }
    println!("{:<12} {:>10} {:>8} {:>6}", "Week of", "Distance", "Miles", "Count");
    for week in weeks {
        println!(
            "{:<12} {:>10} {:>8.1} {:>6}",
            week.week_start.format("%Y-%m-%d"),
            format_distance_km(week.distance_meters),
            week.distance_miles(),
            week.activity_ids.len()
        );
    }
}
