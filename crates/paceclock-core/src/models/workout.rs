// ABOUTME: Workout tree owned by one swimmer: a course, ordered set groups and group rest
// ABOUTME: Every set in the tree is kept snapped to the workout's course
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::mem;
use uuid::Uuid;

use super::{Course, SetGroup};
use crate::errors::{AppError, AppResult};
use crate::units::{Distance, TimeSpan};

/// A swimmer's workout
///
/// # Examples
///
/// ```rust
/// use paceclock_core::models::{Course, SetGroup, Workout};
/// use paceclock_core::units::TimeSpan;
/// use uuid::Uuid;
///
/// let workout = Workout::new(Uuid::new_v4(), "Tuesday", Course::Scy)
///     .with_default_between_group_rest(TimeSpan::from_whole_seconds(30)?)
///     .with_group(SetGroup::new("warmup", 1)?)?
///     .with_group(SetGroup::new("main", 2)?)?;
/// assert_eq!(workout.between_group_rest_after(0), Some(TimeSpan::from_whole_seconds(30)?));
/// assert_eq!(workout.between_group_rest_after(1), None);
/// # Ok::<(), paceclock_core::errors::AppError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorkoutRecord")]
pub struct Workout {
    id: Uuid,
    swimmer_id: Uuid,
    name: String,
    course: Course,
    groups: Vec<SetGroup>,
    default_between_group_rest: TimeSpan,
}

#[derive(Debug, Clone, Deserialize)]
struct WorkoutRecord {
    id: Uuid,
    swimmer_id: Uuid,
    #[serde(default)]
    name: String,
    course: Course,
    #[serde(default)]
    groups: Vec<SetGroup>,
    #[serde(default)]
    default_between_group_rest: TimeSpan,
}

impl TryFrom<WorkoutRecord> for Workout {
    type Error = AppError;

    fn try_from(record: WorkoutRecord) -> AppResult<Self> {
        Self::with_id(record.id, record.swimmer_id, record.name, record.course)
            .with_default_between_group_rest(record.default_between_group_rest)
            .with_groups(record.groups)
    }
}

impl Workout {
    /// Empty workout with a fresh identifier
    #[must_use]
    pub fn new(swimmer_id: Uuid, name: impl Into<String>, course: Course) -> Self {
        Self::with_id(Uuid::new_v4(), swimmer_id, name, course)
    }

    /// Empty workout with a known identifier
    #[must_use]
    pub fn with_id(id: Uuid, swimmer_id: Uuid, name: impl Into<String>, course: Course) -> Self {
        Self {
            id,
            swimmer_id,
            name: name.into(),
            course,
            groups: Vec::new(),
            default_between_group_rest: TimeSpan::ZERO,
        }
    }

    /// Identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Owning swimmer
    #[must_use]
    pub const fn swimmer_id(&self) -> Uuid {
        self.swimmer_id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pool configuration
    #[must_use]
    pub const fn course(&self) -> Course {
        self.course
    }

    /// Groups in swim order
    #[must_use]
    pub fn groups(&self) -> &[SetGroup] {
        &self.groups
    }

    /// Rest between groups that do not set their own
    #[must_use]
    pub const fn default_between_group_rest(&self) -> TimeSpan {
        self.default_between_group_rest
    }

    /// Rest inserted after group `index`; `None` after the last group or out of range
    #[must_use]
    pub fn between_group_rest_after(&self, index: usize) -> Option<TimeSpan> {
        if index.saturating_add(1) >= self.groups.len() {
            return None;
        }
        self.groups.get(index).map(|group| {
            group
                .rest_after()
                .unwrap_or(self.default_between_group_rest)
        })
    }

    /// Total distance of every group
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the sum does not fit.
    pub fn total_distance(&self) -> AppResult<Distance> {
        self.groups
            .iter()
            .try_fold(Distance::ZERO, |acc, group| {
                acc.checked_add(group.total_distance()?)
            })
    }

    /// Same workout with a group appended, its sets snapped to this course
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if snapping overflows.
    pub fn with_group(mut self, group: SetGroup) -> AppResult<Self> {
        self.groups.push(group.with_course(self.course)?);
        Ok(self)
    }

    /// Same workout with its groups replaced
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if snapping overflows.
    pub fn with_groups(mut self, groups: Vec<SetGroup>) -> AppResult<Self> {
        let course = self.course;
        self.groups = groups
            .into_iter()
            .map(|group| group.with_course(course))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(self)
    }

    /// Same workout with the group at `index` removed
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `index` is out of range.
    pub fn without_group(mut self, index: usize) -> AppResult<Self> {
        if index >= self.groups.len() {
            return Err(AppError::invalid_input(format!(
                "group index {index} out of range for workout '{}'",
                self.name
            )));
        }
        self.groups.remove(index);
        Ok(self)
    }

    /// Same workout in another course; every set is re-snapped
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if snapping overflows.
    pub fn with_course(mut self, course: Course) -> AppResult<Self> {
        self.course = course;
        let groups = mem::take(&mut self.groups);
        self.with_groups(groups)
    }

    /// Same workout renamed
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Same workout reassigned to another swimmer
    #[must_use]
    pub const fn with_swimmer(mut self, swimmer_id: Uuid) -> Self {
        self.swimmer_id = swimmer_id;
        self
    }

    /// Same workout with a new default between-group rest; negative becomes zero
    #[must_use]
    pub const fn with_default_between_group_rest(mut self, rest: TimeSpan) -> Self {
        self.default_between_group_rest = rest.clamp_non_negative();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StrokeType, SwimSet};

    fn group_of(name: &str, meters: i64, course: Course) -> SetGroup {
        let set = SwimSet::builder(
            StrokeType::Freestyle,
            1,
            Distance::from_whole_meters(meters).unwrap(),
            course,
        )
        .build()
        .unwrap();
        SetGroup::new(name, 1).unwrap().with_set(set)
    }

    #[test]
    fn test_groups_are_snapped_to_workout_course() {
        let workout = Workout::new(Uuid::new_v4(), "lcm", Course::Lcm)
            .with_group(group_of("main", 75, Course::Scm))
            .unwrap();
        let set = &workout.groups()[0].sets()[0];
        assert_eq!(set.course(), Course::Lcm);
        assert_eq!(set.distance(), Distance::from_whole_meters(100).unwrap());
    }

    #[test]
    fn test_between_group_rest_prefers_group_override() {
        let workout = Workout::new(Uuid::new_v4(), "w", Course::Scm)
            .with_default_between_group_rest(TimeSpan::from_whole_seconds(30).unwrap())
            .with_group(
                group_of("a", 100, Course::Scm)
                    .with_rest_after(Some(TimeSpan::from_whole_seconds(45).unwrap())),
            )
            .unwrap()
            .with_group(group_of("b", 100, Course::Scm))
            .unwrap()
            .with_group(group_of("c", 100, Course::Scm))
            .unwrap();
        assert_eq!(
            workout.between_group_rest_after(0),
            Some(TimeSpan::from_whole_seconds(45).unwrap())
        );
        assert_eq!(
            workout.between_group_rest_after(1),
            Some(TimeSpan::from_whole_seconds(30).unwrap())
        );
        assert_eq!(workout.between_group_rest_after(2), None);
        assert_eq!(workout.between_group_rest_after(7), None);
        assert_eq!(workout.between_group_rest_after(usize::MAX), None);
    }

    #[test]
    fn test_course_change_resnaps_every_set() {
        let workout = Workout::new(Uuid::new_v4(), "w", Course::Scm)
            .with_group(group_of("main", 75, Course::Scm))
            .unwrap();
        assert_eq!(
            workout.total_distance().unwrap(),
            Distance::from_whole_meters(75).unwrap()
        );
        let lcm = workout.with_course(Course::Lcm).unwrap();
        assert_eq!(
            lcm.total_distance().unwrap(),
            Distance::from_whole_meters(100).unwrap()
        );
        let back = lcm.with_course(Course::Scm).unwrap();
        assert_eq!(
            back.total_distance().unwrap(),
            Distance::from_whole_meters(75).unwrap()
        );
    }
}
