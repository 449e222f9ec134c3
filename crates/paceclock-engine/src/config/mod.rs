// ABOUTME: Configuration module for paceclock-engine crate
// ABOUTME: Re-exports pacing configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pacing configuration (rest curves, ratio breakpoints, send-off rounding)
pub mod pacing;

pub use pacing::{
    ConfigError, PacingConfig, RatioConfig, RestCurve, RestCurvesConfig, SendOffConfig,
};
