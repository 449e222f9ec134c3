// ABOUTME: Hierarchical distance and time totals for set groups and whole workouts
// ABOUTME: Injects between-set and between-group rest and builds the per-rep schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aggregation
//!
//! Rolls per-rep prescriptions up the workout tree:
//!
//! - a set contributes its rounded goal and rest for every rep;
//! - a group multiplies one pass by its reps and adds the between-set rest
//!   `(sets - 1) x reps` times;
//! - a workout adds the between-group rest after every group but the last.

use paceclock_core::errors::{AppError, AppResult};
use paceclock_core::models::{SetGroup, SwimSet, Swimmer, Workout};
use paceclock_core::units::{Distance, TimeSpan};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pace_policy::{PacePolicy, RepPrescription, RestCurvePolicy};

/// Totals for one set group, all passes included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotals {
    /// Group name
    pub name: String,
    /// Distance of one pass
    pub single_pass_distance: Distance,
    /// Distance of all passes
    pub distance: Distance,
    /// Sum of rounded goal times
    pub swim_time: TimeSpan,
    /// Sum of per-rep rest
    pub rep_rest: TimeSpan,
    /// Sum of rest between consecutive sets
    pub between_set_rest: TimeSpan,
    /// Rest after this group (zero for the last group)
    pub rest_after: TimeSpan,
}

impl GroupTotals {
    /// Per-rep rest plus between-set rest
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the sum does not fit.
    pub fn intra_group_rest(&self) -> AppResult<TimeSpan> {
        self.rep_rest.checked_add(self.between_set_rest)
    }

    /// Swim time plus intra-group rest
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the sum does not fit.
    pub fn total_time(&self) -> AppResult<TimeSpan> {
        self.swim_time.checked_add(self.intra_group_rest()?)
    }
}

/// Totals for a whole workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTotals {
    /// Per-group breakdown in swim order
    pub groups: Vec<GroupTotals>,
    /// Total distance
    pub distance: Distance,
    /// Sum of rounded goal times
    pub swim_time: TimeSpan,
    /// Per-rep rest plus between-set rest across all groups
    pub intra_group_rest: TimeSpan,
    /// Rest between groups
    pub inter_group_rest: TimeSpan,
    /// Swim time plus all rest
    pub total_time: TimeSpan,
}

/// One repetition in swim order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRep {
    /// Index of the group in the workout
    pub group_index: usize,
    /// Pass through the group, 1-based
    pub pass: u32,
    /// Index of the set in the group
    pub set_index: usize,
    /// Repetition within the set, 1-based
    pub rep: u32,
    /// Figures for this repetition
    pub prescription: RepPrescription,
}

/// Calculator rolling a [`PacePolicy`] up the workout tree
#[derive(Debug, Clone, Default)]
pub struct WorkoutCalculator<P = RestCurvePolicy> {
    policy: P,
}

impl<P: PacePolicy> WorkoutCalculator<P> {
    /// Calculator over `policy`
    #[must_use]
    pub const fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Underlying pace policy
    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Rounded goal and rest summed over every rep of `set`
    fn set_times(
        &self,
        workout: &Workout,
        set: &SwimSet,
        swimmer: &Swimmer,
    ) -> AppResult<(TimeSpan, TimeSpan)> {
        let mut swim = TimeSpan::ZERO;
        let mut rest = TimeSpan::ZERO;
        for rep in 1..=set.reps() {
            let prescription = self.policy.prescribe(workout, set, swimmer, rep)?;
            swim = swim.checked_add(TimeSpan::from_whole_seconds(prescription.goal_rounded)?)?;
            rest = rest.checked_add(prescription.rest()?)?;
        }
        Ok((swim, rest))
    }

    /// Totals for the group at `index`, including the rest that follows it
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `index` is out of range, plus any error from the policy.
    pub fn group_totals(
        &self,
        workout: &Workout,
        swimmer: &Swimmer,
        index: usize,
    ) -> AppResult<GroupTotals> {
        let group = workout
            .groups()
            .get(index)
            .ok_or_else(|| AppError::invalid_input(format!("group index {index} out of range")))?;
        let rest_after = workout
            .between_group_rest_after(index)
            .unwrap_or(TimeSpan::ZERO);
        self.totals_for(workout, group, swimmer, rest_after)
    }

    fn totals_for(
        &self,
        workout: &Workout,
        group: &SetGroup,
        swimmer: &Swimmer,
        rest_after: TimeSpan,
    ) -> AppResult<GroupTotals> {
        let passes = i64::from(group.reps());

        let mut pass_swim = TimeSpan::ZERO;
        let mut pass_rest = TimeSpan::ZERO;
        for set in group.sets() {
            let (swim, rest) = self.set_times(workout, set, swimmer)?;
            pass_swim = pass_swim.checked_add(swim)?;
            pass_rest = pass_rest.checked_add(rest)?;
        }

        let gaps = i64::try_from(group.sets().len().saturating_sub(1)).unwrap_or(i64::MAX);
        let between_set_rest = group
            .rest_between_sets()
            .checked_mul(gaps)?
            .checked_mul(passes)?;

        let totals = GroupTotals {
            name: group.name().to_owned(),
            single_pass_distance: group.single_pass_distance()?,
            distance: group.total_distance()?,
            swim_time: pass_swim.checked_mul(passes)?,
            rep_rest: pass_rest.checked_mul(passes)?,
            between_set_rest,
            rest_after,
        };
        debug!(
            group = group.name(),
            distance = %totals.distance,
            swim_time = %totals.swim_time,
            "aggregated group"
        );
        Ok(totals)
    }

    /// Totals for every group and the whole workout
    ///
    /// # Errors
    ///
    /// Any error from the policy (e.g. `MissingSeed`) or `ArithmeticOverflow`.
    pub fn workout_totals(&self, workout: &Workout, swimmer: &Swimmer) -> AppResult<WorkoutTotals> {
        let mut groups = Vec::with_capacity(workout.groups().len());
        let mut distance = Distance::ZERO;
        let mut swim_time = TimeSpan::ZERO;
        let mut intra_group_rest = TimeSpan::ZERO;
        let mut inter_group_rest = TimeSpan::ZERO;

        for (index, group) in workout.groups().iter().enumerate() {
            let rest_after = workout
                .between_group_rest_after(index)
                .unwrap_or(TimeSpan::ZERO);
            let totals = self.totals_for(workout, group, swimmer, rest_after)?;
            distance = distance.checked_add(totals.distance)?;
            swim_time = swim_time.checked_add(totals.swim_time)?;
            intra_group_rest = intra_group_rest.checked_add(totals.intra_group_rest()?)?;
            inter_group_rest = inter_group_rest.checked_add(totals.rest_after)?;
            groups.push(totals);
        }

        let total_time = swim_time
            .checked_add(intra_group_rest)?
            .checked_add(inter_group_rest)?;
        debug!(
            workout = workout.name(),
            distance = %distance,
            total_time = %total_time,
            "aggregated workout"
        );

        Ok(WorkoutTotals {
            groups,
            distance: distance.re_tagged(workout.course().native_unit()),
            swim_time,
            intra_group_rest,
            inter_group_rest,
            total_time,
        })
    }

    /// Every repetition of the workout in swim order
    ///
    /// # Errors
    ///
    /// Any error from the policy.
    pub fn plan_workout(&self, workout: &Workout, swimmer: &Swimmer) -> AppResult<Vec<PlannedRep>> {
        let mut plan = Vec::new();
        for (group_index, group) in workout.groups().iter().enumerate() {
            for pass in 1..=group.reps() {
                for (set_index, set) in group.sets().iter().enumerate() {
                    for rep in 1..=set.reps() {
                        plan.push(PlannedRep {
                            group_index,
                            pass,
                            set_index,
                            rep,
                            prescription: self.policy.prescribe(workout, set, swimmer, rep)?,
                        });
                    }
                }
            }
        }
        Ok(plan)
    }
}
