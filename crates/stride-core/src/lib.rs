// ABOUTME: Core types and constants for the Stride running analytics workspace
// ABOUTME: Foundation crate with error handling, samples, stream payloads, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for Stride running
//! analytics. Everything the classifier and the outer surfaces agree on lives
//! here so the algorithm crate stays free of I/O concerns.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the segmentation error taxonomy
//! - **constants**: unit conversions and classifier defaults
//! - **models**: `Sample`, decoded stream payloads, activity summaries
//! - **formatters**: pace, duration, and distance strings for presentation

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (samples, streams, activity summaries)
pub mod models;

/// Pace, duration, and distance formatting
pub mod formatters;
