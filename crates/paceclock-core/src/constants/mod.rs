// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion factors, course data, and pacing multiplier tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. The model types in [`crate::models`]
//! map their tags onto these values; nothing here carries behavior.

/// Unit conversion constants for the canonical micro-unit representation
pub mod units {
    /// Micro-units per meter (1 micro-unit = 0.1 mm)
    pub const MICRO_UNITS_PER_METER: i64 = 10_000;
    /// Micro-units per yard (0.9144 m, exact)
    pub const MICRO_UNITS_PER_YARD: i64 = 9_144;
    /// Milliseconds per second
    pub const MILLIS_PER_SECOND: i64 = 1_000;
    /// Milliseconds per minute
    pub const MILLIS_PER_MINUTE: i64 = 60_000;
}

/// Pool configurations
pub mod course {
    use super::units::{MICRO_UNITS_PER_METER, MICRO_UNITS_PER_YARD};

    /// Short course yards pool length in micro-units (25 yd)
    pub const SCY_POOL_UNITS: i64 = 25 * MICRO_UNITS_PER_YARD;
    /// Short course meters pool length in micro-units (25 m)
    pub const SCM_POOL_UNITS: i64 = 25 * MICRO_UNITS_PER_METER;
    /// Long course meters pool length in micro-units (50 m)
    pub const LCM_POOL_UNITS: i64 = 50 * MICRO_UNITS_PER_METER;

    /// Turn-frequency multiplier for short course yards (baseline)
    pub const SCY_MULTIPLIER: f64 = 1.00;
    /// Turn-frequency multiplier for short course meters
    pub const SCM_MULTIPLIER: f64 = 1.04;
    /// Turn-frequency multiplier for long course meters
    pub const LCM_MULTIPLIER: f64 = 1.07;
}

/// Effort tier parameters
///
/// The pace multiplier scales the seed-derived goal time. The rest allowance is a
/// legacy per-tier value kept for collaborators; the rest algorithm uses the
/// rest-percent curves instead.
pub mod effort {
    /// Easy pace multiplier
    pub const EASY_PACE: f64 = 1.55;
    /// Endurance pace multiplier
    pub const ENDURANCE_PACE: f64 = 1.30;
    /// Threshold pace multiplier
    pub const THRESHOLD_PACE: f64 = 1.15;
    /// Race-pace multiplier
    pub const RACE_PACE_PACE: f64 = 1.05;
    /// VO2-max pace multiplier
    pub const VO2_MAX_PACE: f64 = 1.08;
    /// Sprint pace multiplier
    pub const SPRINT_PACE: f64 = 0.97;

    /// Easy rest allowance (seconds)
    pub const EASY_REST_ALLOWANCE_SEC: u32 = 10;
    /// Endurance rest allowance (seconds)
    pub const ENDURANCE_REST_ALLOWANCE_SEC: u32 = 10;
    /// Threshold rest allowance (seconds)
    pub const THRESHOLD_REST_ALLOWANCE_SEC: u32 = 15;
    /// Race-pace rest allowance (seconds)
    pub const RACE_PACE_REST_ALLOWANCE_SEC: u32 = 30;
    /// VO2-max rest allowance (seconds)
    pub const VO2_MAX_REST_ALLOWANCE_SEC: u32 = 30;
    /// Sprint rest allowance (seconds)
    pub const SPRINT_REST_ALLOWANCE_SEC: u32 = 60;
}

/// Training aid pace adjustments (below 1.0 is faster)
pub mod equipment {
    /// Fins
    pub const FINS: f64 = 0.88;
    /// Hand paddles
    pub const PADDLES: f64 = 0.95;
    /// Pull buoy
    pub const PULL_BUOY: f64 = 1.03;
    /// Kickboard
    pub const KICKBOARD: f64 = 1.30;
    /// Center-mount snorkel
    pub const SNORKEL: f64 = 0.99;
    /// Ankle/drag band
    pub const DRAG_BAND: f64 = 1.10;
}

/// Distance buckets (meters) and their pace multipliers, ascending
pub const DISTANCE_FACTOR_BUCKETS: [(u32, f64); 8] = [
    (25, 0.96),
    (50, 0.98),
    (100, 1.00),
    (200, 1.05),
    (400, 1.10),
    (800, 1.14),
    (1000, 1.16),
    (1500, 1.20),
];

/// Rest-percent curve defaults: fraction of the rounded goal time given as rest
///
/// Each curve has a value for repeats no longer than the seed baseline (`SHORT`),
/// a value at the interim break (`INTERIM`) and a value at the long clamp (`LONG`).
pub mod rest_curve {
    /// Easy: repeats up to the baseline distance
    pub const EASY_SHORT: f64 = 0.10;
    /// Easy: at the interim break
    pub const EASY_INTERIM: f64 = 0.18;
    /// Easy: at the long clamp
    pub const EASY_LONG: f64 = 0.05;

    /// Endurance: repeats up to the baseline distance
    pub const ENDURANCE_SHORT: f64 = 0.04;
    /// Endurance: at the interim break
    pub const ENDURANCE_INTERIM: f64 = 0.05;
    /// Endurance: at the long clamp
    pub const ENDURANCE_LONG: f64 = 0.045;

    /// Threshold: repeats up to the baseline distance
    pub const THRESHOLD_SHORT: f64 = 0.067;
    /// Threshold: at the interim break
    pub const THRESHOLD_INTERIM: f64 = 0.055;
    /// Threshold: at the long clamp
    pub const THRESHOLD_LONG: f64 = 0.040;

    /// Race-pace, VO2-max and sprint: repeats up to the baseline distance
    pub const HIGH_INTENSITY_SHORT: f64 = 0.70;
    /// High intensity: at the interim break
    pub const HIGH_INTENSITY_INTERIM: f64 = 0.25;
    /// High intensity: at the long clamp
    pub const HIGH_INTENSITY_LONG: f64 = 0.05;

    /// Sets without an effort tier
    pub const UNSET_EFFORT: f64 = 0.06;

    /// Lower bound on the distance ratio
    pub const MIN_RATIO: f64 = 0.1;
    /// Ratio where the short-to-interim segment ends
    pub const INTERIM_BREAK: f64 = 4.0;
    /// Ratio past which the curve is flat
    pub const LONG_CLAMP: f64 = 15.0;
    /// Baseline used when a seed has no positive distance (meters)
    pub const FALLBACK_BASELINE_METERS: f64 = 100.0;
}

/// Send-off rounding
pub mod send_off {
    /// Send-offs land on this many seconds
    pub const STEP_SECONDS: i64 = 5;
    /// Remainders at or above this round up to the next step
    pub const ROUND_UP_THRESHOLD: i64 = 3;
}
