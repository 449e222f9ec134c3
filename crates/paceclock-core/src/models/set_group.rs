// ABOUTME: Named, repeated sequence of swim sets with between-set and after-group rest
// ABOUTME: Rest durations are clamped to zero; the group re-snaps its sets on course changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{Course, SwimSet};
use crate::errors::{AppError, AppResult};
use crate::units::{Distance, TimeSpan};

/// Ordered collection of [`SwimSet`]s swum `reps` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SetGroupRecord")]
pub struct SetGroup {
    name: String,
    sets: Vec<SwimSet>,
    reps: u32,
    rest_between_sets: TimeSpan,
    rest_after: Option<TimeSpan>,
}

#[derive(Debug, Clone, Deserialize)]
struct SetGroupRecord {
    name: String,
    #[serde(default)]
    sets: Vec<SwimSet>,
    reps: u32,
    #[serde(default)]
    rest_between_sets: TimeSpan,
    #[serde(default)]
    rest_after: Option<TimeSpan>,
}

impl TryFrom<SetGroupRecord> for SetGroup {
    type Error = AppError;

    fn try_from(record: SetGroupRecord) -> AppResult<Self> {
        Ok(Self::new(record.name, record.reps)?
            .with_sets(record.sets)
            .with_rest_between_sets(record.rest_between_sets)
            .with_rest_after(record.rest_after))
    }
}

impl SetGroup {
    /// Empty group repeated `reps` times
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `reps` is zero.
    pub fn new(name: impl Into<String>, reps: u32) -> AppResult<Self> {
        if reps < 1 {
            return Err(AppError::invalid_input("group reps must be at least 1"));
        }
        Ok(Self {
            name: name.into(),
            sets: Vec::new(),
            reps,
            rest_between_sets: TimeSpan::ZERO,
            rest_after: None,
        })
    }

    /// Group name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets in swim order
    #[must_use]
    pub fn sets(&self) -> &[SwimSet] {
        &self.sets
    }

    /// Number of passes through the sets
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.reps
    }

    /// Rest between consecutive sets within one pass
    #[must_use]
    pub const fn rest_between_sets(&self) -> TimeSpan {
        self.rest_between_sets
    }

    /// Rest after the group, overriding the workout default
    #[must_use]
    pub const fn rest_after(&self) -> Option<TimeSpan> {
        self.rest_after
    }

    /// Distance of one pass through the sets
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the sum does not fit.
    pub fn single_pass_distance(&self) -> AppResult<Distance> {
        self.sets
            .iter()
            .try_fold(Distance::ZERO, |acc, set| acc.checked_add(set.total_distance()?))
    }

    /// Distance of all passes
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the product does not fit.
    pub fn total_distance(&self) -> AppResult<Distance> {
        self.single_pass_distance()?
            .checked_mul(i64::from(self.reps))
    }

    /// Same group with a set appended
    #[must_use]
    pub fn with_set(mut self, set: SwimSet) -> Self {
        self.sets.push(set);
        self
    }

    /// Same group with its sets replaced
    #[must_use]
    pub fn with_sets(mut self, sets: Vec<SwimSet>) -> Self {
        self.sets = sets;
        self
    }

    /// Same group with the set at `index` removed
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `index` is out of range.
    pub fn without_set(mut self, index: usize) -> AppResult<Self> {
        if index >= self.sets.len() {
            return Err(AppError::invalid_input(format!(
                "set index {index} out of range for group '{}'",
                self.name
            )));
        }
        self.sets.remove(index);
        Ok(self)
    }

    /// Same group renamed
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Same group with a new pass count
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `reps` is zero.
    pub fn with_reps(mut self, reps: u32) -> AppResult<Self> {
        if reps < 1 {
            return Err(AppError::invalid_input("group reps must be at least 1"));
        }
        self.reps = reps;
        Ok(self)
    }

    /// Same group with a between-set rest; negative values become zero
    #[must_use]
    pub fn with_rest_between_sets(mut self, rest: TimeSpan) -> Self {
        self.rest_between_sets = rest.clamp_non_negative();
        self
    }

    /// Same group with an after-group rest; negative values become zero
    #[must_use]
    pub fn with_rest_after(mut self, rest: Option<TimeSpan>) -> Self {
        self.rest_after = rest.map(TimeSpan::clamp_non_negative);
        self
    }

    /// Same group with every set moved to `course`
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if snapping overflows.
    pub fn with_course(mut self, course: Course) -> AppResult<Self> {
        self.sets = self
            .sets
            .into_iter()
            .map(|set| set.with_course(course))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrokeType;

    fn fifties(reps: u32, course: Course) -> SwimSet {
        SwimSet::builder(
            StrokeType::Freestyle,
            reps,
            Distance::from_whole_yards(50).unwrap(),
            course,
        )
        .build()
        .unwrap()
    }

    #[test]
    fn test_rest_is_clamped_to_zero() {
        let group = SetGroup::new("main", 1)
            .unwrap()
            .with_rest_between_sets(TimeSpan::from_millis(-10_000))
            .with_rest_after(Some(TimeSpan::from_millis(-1)));
        assert_eq!(group.rest_between_sets(), TimeSpan::ZERO);
        assert_eq!(group.rest_after(), Some(TimeSpan::ZERO));
    }

    #[test]
    fn test_zero_reps_rejected() {
        assert!(SetGroup::new("warmup", 0).is_err());
        let group = SetGroup::new("warmup", 2).unwrap();
        assert!(group.with_reps(0).is_err());
    }

    #[test]
    fn test_distances() {
        let group = SetGroup::new("main", 3)
            .unwrap()
            .with_set(fifties(4, Course::Scy))
            .with_set(fifties(2, Course::Scy));
        assert_eq!(
            group.single_pass_distance().unwrap(),
            Distance::from_whole_yards(300).unwrap()
        );
        assert_eq!(
            group.total_distance().unwrap(),
            Distance::from_whole_yards(900).unwrap()
        );
    }

    #[test]
    fn test_without_set_bounds() {
        let group = SetGroup::new("main", 1)
            .unwrap()
            .with_set(fifties(1, Course::Scy));
        assert!(group.clone().without_set(1).is_err());
        assert!(group.without_set(0).unwrap().sets().is_empty());
    }
}
