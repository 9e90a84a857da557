// ABOUTME: End-to-end tests for the stride-cli binary
// ABOUTME: Runs the built executable against temporary stream files and checks stdout and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::NamedTempFile;

const RUN_WALK_STREAMS: &str =
    r#"{"time": [0, 1, 2, 3, 4], "velocity_smooth": [1.0, 1.0, 3.0, 3.0, 1.0]}"#;

fn streams_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn stride_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stride-cli"))
        .args(args)
        .env_remove("STRIDE_RUNNING_THRESHOLD_MPS")
        .env_remove("STRIDE_FIRST_INTERVAL_POLICY")
        .env_remove("STRIDE_PACE_CHART_CAP_MIN_PER_KM")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_analyze_json_report() {
    let file = streams_file(RUN_WALK_STREAMS);
    let output = stride_cli(&["analyze", "--streams", file.path().to_str().unwrap(), "--json"]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["status"], "analyzed");
    assert_eq!(value["report"]["running_segment_count"], 1);
}

#[test]
fn test_analyze_negative_threshold_prints_failed_outcome() {
    let file = streams_file(RUN_WALK_STREAMS);
    let output = stride_cli(&[
        "analyze",
        "--streams",
        file.path().to_str().unwrap(),
        "--threshold",
        "-1",
        "--json",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let value = stdout_json(&output);
    assert_eq!(value["status"], "failed");
    assert_eq!(value["message"], "Could not analyze activity");
}

#[test]
fn test_analyze_decreasing_time_prints_failed_outcome() {
    let file = streams_file(r#"{"time": [0, 5, 4], "velocity_smooth": [1.0, 1.0, 1.0]}"#);
    let output = stride_cli(&["analyze", "--streams", file.path().to_str().unwrap(), "--json"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["status"], "failed");
}

#[test]
fn test_analyze_text_failure_message() {
    let file = streams_file(RUN_WALK_STREAMS);
    let output = stride_cli(&[
        "analyze",
        "--streams",
        file.path().to_str().unwrap(),
        "--threshold",
        "-0.5",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim(),
        "Could not analyze activity"
    );
}

#[test]
fn test_pace_series_invalid_cap_prints_failed_outcome() {
    let file = streams_file(RUN_WALK_STREAMS);
    let output = stride_cli(&[
        "pace-series",
        "--streams",
        file.path().to_str().unwrap(),
        "--cap",
        "0",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["status"], "failed");
}

#[test]
fn test_pace_series_points() {
    let file = streams_file(RUN_WALK_STREAMS);
    let output = stride_cli(&["pace-series", "--streams", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let points = stdout_json(&output);
    assert_eq!(points.as_array().unwrap().len(), 5);
}
