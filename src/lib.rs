// ABOUTME: Paceclock facade crate re-exporting the core models and the pacing engine
// ABOUTME: Adds logging setup shared by the command-line binary and benches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Paceclock
//!
//! Swim workout pacing: given a swimmer's seed paces and a workout of grouped
//! sets, compute each repetition's goal time, rest and send-off interval, then
//! roll distance and time up through groups to the whole workout.
//!
//! ## Crates
//!
//! - **`paceclock-core`**: exact units, configuration tables and the workout tree
//! - **`paceclock-engine`**: pacing configuration, the pace policy and aggregation
//!
//! ## Example
//!
//! ```rust
//! use paceclock::models::{Course, Effort, SeedPace, SetGroup, StrokeType, SwimSet, Swimmer, Workout};
//! use paceclock::units::{Distance, TimeSpan};
//! use paceclock::{PacePolicy, RestCurvePolicy};
//!
//! let swimmer = Swimmer::new("Ada").with_seed(
//!     StrokeType::Freestyle,
//!     SeedPace::new(Distance::from_whole_yards(100)?, TimeSpan::from_whole_seconds(60)?),
//! );
//! let set = SwimSet::builder(StrokeType::Freestyle, 4, Distance::from_whole_yards(100)?, Course::Scy)
//!     .effort(Effort::Threshold)
//!     .build()?;
//! let workout = Workout::new(swimmer.id(), "Tuesday", Course::Scy)
//!     .with_group(SetGroup::new("main", 1)?.with_set(set))?;
//!
//! let policy = RestCurvePolicy::default();
//! let set = &workout.groups()[0].sets()[0];
//! let rep = policy.prescribe(&workout, set, &swimmer, 1)?;
//! assert_eq!(rep.interval_seconds % 5, 0);
//! # Ok::<(), paceclock::errors::AppError>(())
//! ```

/// Structured logging setup for binaries
pub mod logging;

pub use paceclock_core::{constants, errors, models, units};
pub use paceclock_engine::{aggregation, config, pace_policy};
pub use paceclock_engine::{
    ConfigError, GroupTotals, PacePolicy, PacingConfig, PlannedRep, RepPrescription,
    RestCurvePolicy, WorkoutCalculator, WorkoutTotals,
};
