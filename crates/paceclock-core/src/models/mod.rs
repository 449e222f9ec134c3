// ABOUTME: Configuration tables and workout structure models for swim pacing
// ABOUTME: Re-exports Course, Effort, Equipment, StrokeType, SwimSet, SetGroup, Workout and Swimmer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Two families of types live here.
//!
//! ## Configuration tables
//!
//! Enum tags that map to immutable parameter records: `Course` (pool length and
//! course multiplier), `Effort` (pace multiplier and rest-curve tier), `Equipment`
//! (pace multiplier per training aid), `StrokeType` (labels and parse aliases) and
//! `DistanceFactors` (distance-bucket multipliers).
//!
//! ## Workout structure
//!
//! - `Swimmer`: identity plus one `SeedPace` per stroke
//! - `SwimSet`: one repeat unit, built through `SwimSetBuilder`
//! - `SetGroup`: named, repeated sequence of sets
//! - `Workout`: a swimmer's course and ordered groups
//!
//! Structure types are changed by `with_*` rebuild methods that return a new,
//! validated value.

// Configuration tables
mod course;
mod distance_factors;
mod effort;
mod equipment;
mod stroke;

// Workout structure
mod seed_pace;
mod set_group;
mod swim_set;
mod swimmer;
mod workout;

pub use course::{Course, CourseSpec};
pub use distance_factors::DistanceFactors;
pub use effort::{Effort, EffortSpec, RestTier};
pub use equipment::{Equipment, EquipmentSet};
pub use stroke::StrokeType;

pub use seed_pace::SeedPace;
pub use set_group::SetGroup;
pub use swim_set::{SwimSet, SwimSetBuilder};
pub use swimmer::Swimmer;
pub use workout::Workout;
