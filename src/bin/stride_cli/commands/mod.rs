// ABOUTME: Command implementations for stride-cli
// ABOUTME: Stream analysis, pace series, and weekly totals subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

pub mod analyze;
pub mod weekly;
