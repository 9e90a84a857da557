// ABOUTME: Stride CLI - run/walk analysis, pace charts, and weekly totals from exported data
// ABOUTME: Reads stream and activity JSON files and prints reports or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors
//!
//! Usage:
//! ```bash
//! # Run/walk breakdown of one activity's streams
//! stride-cli analyze --streams streams.json
//!
//! # Same, with a custom running threshold, as JSON
//! stride-cli analyze --streams streams.json --threshold 2.5 --json
//!
//! # Pace chart series capped at 12 min/km
//! stride-cli pace-series --streams streams.json --cap 12
//!
//! # Weekly distance from an activity listing
//! stride-cli weekly --activities activities.json --runs-only
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stride_analytics::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Stride running analytics CLI",
    long_about = "Classify activity streams into running and walking segments and summarize pace."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run/walk breakdown of one activity
    Analyze {
        /// Stream payload JSON file (keyed-by-type, list, or flat form)
        #[arg(long)]
        streams: PathBuf,

        /// Running threshold in m/s (overrides `STRIDE_RUNNING_THRESHOLD_MPS`)
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pace-over-time chart series as JSON
    PaceSeries {
        /// Stream payload JSON file
        #[arg(long)]
        streams: PathBuf,

        /// Slowest plotted pace in min/km (overrides `STRIDE_PACE_CHART_CAP_MIN_PER_KM`)
        #[arg(long)]
        cap: Option<f64>,
    },

    /// Weekly distance totals from an activity listing
    Weekly {
        /// Activity summary listing JSON file
        #[arg(long)]
        activities: PathBuf,

        /// Only count activities of type Run
        #[arg(long)]
        runs_only: bool,

        /// Print the totals as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.verbose().init()?;
    } else {
        logging.init()?;
    }

    // Segmentation settings are resolved per command so a rejected value
    // surfaces as a failed analysis
    match cli.command {
        Command::Analyze {
            streams,
            threshold,
            json,
        } => commands::analyze::run(&streams, threshold, json),
        Command::PaceSeries { streams, cap } => commands::analyze::pace_series(&streams, cap),
        Command::Weekly {
            activities,
            runs_only,
            json,
        } => commands::weekly::run(&activities, runs_only, json),
    }
}
