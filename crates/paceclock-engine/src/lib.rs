// ABOUTME: Swim pacing engine computing per-rep goal, rest, and send-off figures
// ABOUTME: Provides pacing configuration, the pace policy, and workout aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Paceclock Engine
//!
//! Deterministic, synchronous pacing computations over `paceclock-core` entities.
//! Nothing here mutates its inputs or performs I/O; library code only emits
//! `tracing` events.
//!
//! ## Modules
//!
//! - **config**: Rest curves, ratio breakpoints and send-off rounding with env overrides
//! - **`pace_policy`**: The `PacePolicy` trait and the rest-curve implementation
//! - **aggregation**: Group and workout totals plus the per-rep schedule

/// Pacing configuration with environment overrides and validation
pub mod config;

/// Per-repetition goal, rest and send-off computation
pub mod pace_policy;

/// Hierarchical distance and time totals
pub mod aggregation;

pub use aggregation::{GroupTotals, PlannedRep, WorkoutCalculator, WorkoutTotals};
pub use config::{ConfigError, PacingConfig};
pub use pace_policy::{PacePolicy, RepPrescription, RestCurvePolicy};
