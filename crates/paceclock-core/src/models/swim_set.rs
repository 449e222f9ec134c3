// ABOUTME: A single structured repeat unit (e.g. 4 x 50 free easy) and its builder
// ABOUTME: Per-rep distance is always snapped up to a whole number of pool lengths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Course, Effort, EquipmentSet, StrokeType};
use crate::constants::units::MILLIS_PER_SECOND;
use crate::errors::{AppError, AppResult};
use crate::units::{Distance, TimeSpan};

/// Explicit send-off overrides must land on this boundary
const INTERVAL_OVERRIDE_STEP_MILLIS: i64 = 5 * MILLIS_PER_SECOND;

/// One repeat unit inside a [`super::SetGroup`].
///
/// Instances are only produced by [`SwimSetBuilder::build`] or the `with_*`
/// rebuild methods, all of which validate and re-snap the per-rep distance to the
/// set's course. The distance the caller asked for is kept separately, so moving a
/// set between courses always snaps from the original request.
///
/// # Examples
///
/// ```rust
/// use paceclock_core::models::{Course, Effort, StrokeType, SwimSet};
/// use paceclock_core::units::Distance;
///
/// let set = SwimSet::builder(StrokeType::Freestyle, 4, Distance::from_whole_meters(75)?, Course::Lcm)
///     .effort(Effort::Threshold)
///     .build()?;
/// assert_eq!(set.distance(), Distance::from_whole_meters(100)?);
/// # Ok::<(), paceclock_core::errors::AppError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SwimSetRecord")]
pub struct SwimSet {
    stroke: StrokeType,
    reps: u32,
    requested_distance: Distance,
    distance: Distance,
    course: Course,
    effort: Option<Effort>,
    equipment: EquipmentSet,
    note: String,
    goal_override: Option<TimeSpan>,
    interval_override: Option<TimeSpan>,
}

/// Unvalidated field bag; deserialization goes through [`SwimSet::try_from`]
#[derive(Debug, Clone, Deserialize)]
struct SwimSetRecord {
    stroke: StrokeType,
    reps: u32,
    requested_distance: Distance,
    course: Course,
    #[serde(default)]
    effort: Option<Effort>,
    #[serde(default)]
    equipment: EquipmentSet,
    #[serde(default)]
    note: String,
    #[serde(default)]
    goal_override: Option<TimeSpan>,
    #[serde(default)]
    interval_override: Option<TimeSpan>,
}

impl TryFrom<SwimSetRecord> for SwimSet {
    type Error = AppError;

    fn try_from(record: SwimSetRecord) -> AppResult<Self> {
        Self {
            stroke: record.stroke,
            reps: record.reps,
            requested_distance: record.requested_distance,
            distance: record.requested_distance,
            course: record.course,
            effort: record.effort,
            equipment: record.equipment,
            note: record.note,
            goal_override: record.goal_override,
            interval_override: record.interval_override,
        }
        .validated()
    }
}

impl SwimSet {
    /// Start building a set; required fields up front
    #[must_use]
    pub fn builder(
        stroke: StrokeType,
        reps: u32,
        distance_per_rep: Distance,
        course: Course,
    ) -> SwimSetBuilder {
        SwimSetBuilder::new(stroke, reps, distance_per_rep, course)
    }

    /// Stroke
    #[must_use]
    pub const fn stroke(&self) -> StrokeType {
        self.stroke
    }

    /// Repetition count (at least 1)
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.reps
    }

    /// Snapped per-rep distance, a whole number of pool lengths
    #[must_use]
    pub const fn distance(&self) -> Distance {
        self.distance
    }

    /// Per-rep distance as originally requested
    #[must_use]
    pub const fn requested_distance(&self) -> Distance {
        self.requested_distance
    }

    /// Course the distance is snapped to
    #[must_use]
    pub const fn course(&self) -> Course {
        self.course
    }

    /// Effort tier, if set
    #[must_use]
    pub const fn effort(&self) -> Option<Effort> {
        self.effort
    }

    /// Training aids
    #[must_use]
    pub const fn equipment(&self) -> EquipmentSet {
        self.equipment
    }

    /// Free-text note
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Explicit goal time, replacing the computed one
    #[must_use]
    pub const fn goal_override(&self) -> Option<TimeSpan> {
        self.goal_override
    }

    /// Explicit send-off, replacing the computed one
    #[must_use]
    pub const fn interval_override(&self) -> Option<TimeSpan> {
        self.interval_override
    }

    /// Total distance of the set (per-rep distance x reps)
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the product does not fit.
    pub fn total_distance(&self) -> AppResult<Distance> {
        self.distance.checked_mul(i64::from(self.reps))
    }

    /// Same set with a new requested per-rep distance, re-snapped
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the distance is not positive.
    pub fn with_distance(mut self, distance_per_rep: Distance) -> AppResult<Self> {
        self.requested_distance = distance_per_rep;
        self.validated()
    }

    /// Same set in another course, re-snapped from the requested distance
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if snapping overflows.
    pub fn with_course(mut self, course: Course) -> AppResult<Self> {
        self.course = course;
        self.validated()
    }

    /// Same set with a new repetition count
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `reps` is zero.
    pub fn with_reps(mut self, reps: u32) -> AppResult<Self> {
        self.reps = reps;
        self.validated()
    }

    /// Same set with another stroke
    #[must_use]
    pub const fn with_stroke(mut self, stroke: StrokeType) -> Self {
        self.stroke = stroke;
        self
    }

    /// Same set with another (or no) effort tier
    #[must_use]
    pub const fn with_effort(mut self, effort: Option<Effort>) -> Self {
        self.effort = effort;
        self
    }

    /// Same set with other training aids
    #[must_use]
    pub const fn with_equipment(mut self, equipment: EquipmentSet) -> Self {
        self.equipment = equipment;
        self
    }

    /// Same set with another note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Same set with another (or no) goal override
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the override is not positive.
    pub fn with_goal_override(mut self, goal: Option<TimeSpan>) -> AppResult<Self> {
        self.goal_override = goal;
        self.validated()
    }

    /// Same set with another (or no) send-off override
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the override is not a positive multiple of 5 seconds.
    pub fn with_interval_override(mut self, interval: Option<TimeSpan>) -> AppResult<Self> {
        self.interval_override = interval;
        self.validated()
    }

    fn validated(mut self) -> AppResult<Self> {
        if self.reps < 1 {
            return Err(AppError::invalid_input("reps must be at least 1"));
        }
        if !self.requested_distance.is_positive() {
            return Err(AppError::invalid_input(format!(
                "distance per rep must be positive, got {}",
                self.requested_distance
            )));
        }
        if let Some(goal) = self.goal_override {
            if goal.as_millis() <= 0 {
                return Err(AppError::invalid_input(format!(
                    "goal override must be positive, got {goal}"
                )));
            }
        }
        if let Some(interval) = self.interval_override {
            let millis = interval.as_millis();
            if millis <= 0 || millis % INTERVAL_OVERRIDE_STEP_MILLIS != 0 {
                return Err(AppError::invalid_input(format!(
                    "interval override must be a positive multiple of 5 seconds, got {interval}"
                )));
            }
        }
        self.distance = self
            .requested_distance
            .snap_up_to_course_multiple(self.course)?;
        if self.distance != self.requested_distance {
            debug!(
                requested = %self.requested_distance,
                snapped = %self.distance,
                course = %self.course,
                "repeat distance snapped to pool lengths"
            );
        }
        Ok(self)
    }
}

/// Builder for [`SwimSet`]
#[derive(Debug, Clone)]
pub struct SwimSetBuilder {
    set: SwimSet,
}

impl SwimSetBuilder {
    /// Required fields; everything else defaults to unset/empty
    #[must_use]
    pub fn new(stroke: StrokeType, reps: u32, distance_per_rep: Distance, course: Course) -> Self {
        Self {
            set: SwimSet {
                stroke,
                reps,
                requested_distance: distance_per_rep,
                distance: distance_per_rep,
                course,
                effort: None,
                equipment: EquipmentSet::empty(),
                note: String::new(),
                goal_override: None,
                interval_override: None,
            },
        }
    }

    /// Effort tier
    #[must_use]
    pub const fn effort(mut self, effort: Effort) -> Self {
        self.set.effort = Some(effort);
        self
    }

    /// Training aids
    #[must_use]
    pub const fn equipment(mut self, equipment: EquipmentSet) -> Self {
        self.set.equipment = equipment;
        self
    }

    /// Free-text note
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.set.note = note.into();
        self
    }

    /// Explicit goal time per rep
    #[must_use]
    pub const fn goal_override(mut self, goal: TimeSpan) -> Self {
        self.set.goal_override = Some(goal);
        self
    }

    /// Explicit send-off per rep
    #[must_use]
    pub const fn interval_override(mut self, interval: TimeSpan) -> Self {
        self.set.interval_override = Some(interval);
        self
    }

    /// Validate and snap
    ///
    /// # Errors
    ///
    /// `InvalidInput` for zero reps, a non-positive distance or a bad override.
    pub fn build(self) -> AppResult<SwimSet> {
        self.set.validated()
    }
}
