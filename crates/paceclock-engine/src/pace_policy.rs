// ABOUTME: Per-repetition goal, rest, and send-off computation from a swimmer's seed pace
// ABOUTME: Defines the PacePolicy trait and the rest-curve policy driven by PacingConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pace Policy
//!
//! Turns a seed pace into per-rep figures:
//!
//! 1. **Goal**: repeat meters over seed speed, scaled by the effort, distance
//!    bucket (threshold and harder only), course and equipment multipliers.
//! 2. **Rest**: the rounded goal times a rest fraction read off the effort's
//!    rest curve at the ratio of repeat distance to seed baseline distance.
//! 3. **Send-off**: rounded goal plus rest, placed on the 5 second clock.
//!
//! Explicit overrides on a set replace the computed goal or send-off. An
//! interval override turns the rest into whatever is left of it after the goal.

use paceclock_core::errors::{AppError, AppResult};
use paceclock_core::models::{DistanceFactors, SeedPace, SwimSet, Swimmer, Workout};
use paceclock_core::units::TimeSpan;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{ConfigError, PacingConfig};

/// Figures for one repetition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepPrescription {
    /// Unrounded goal time in seconds
    pub goal_seconds: f64,
    /// Goal rounded half up to whole seconds
    pub goal_rounded: i64,
    /// Rest in whole seconds (never negative)
    pub rest_seconds: i64,
    /// Send-off in whole seconds
    pub interval_seconds: i64,
    /// Short human-readable summary
    pub label: String,
}

impl RepPrescription {
    /// Goal as a span (millisecond precision)
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the goal is not finite.
    pub fn goal(&self) -> AppResult<TimeSpan> {
        TimeSpan::from_seconds(self.goal_seconds)
    }

    /// Rest as a span
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` when out of range.
    pub fn rest(&self) -> AppResult<TimeSpan> {
        TimeSpan::from_whole_seconds(self.rest_seconds)
    }

    /// Send-off as a span
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` when out of range.
    pub fn interval(&self) -> AppResult<TimeSpan> {
        TimeSpan::from_whole_seconds(self.interval_seconds)
    }
}

/// Strategy computing per-rep figures for a set in a workout.
///
/// Implementors provide [`PacePolicy::prescribe`]; the single-figure accessors
/// delegate to it. Implementations must not depend on hidden state: the same
/// inputs always yield the same prescription.
pub trait PacePolicy: Send + Sync {
    /// All figures for repetition `rep_index` (1-based) of `set`
    ///
    /// # Errors
    ///
    /// `MissingSeed` if the swimmer has no seed for the set's stroke, `InvalidInput`
    /// for a bad repetition index, a non-positive seed speed or a workout that
    /// belongs to another swimmer.
    fn prescribe(
        &self,
        workout: &Workout,
        set: &SwimSet,
        swimmer: &Swimmer,
        rep_index: u32,
    ) -> AppResult<RepPrescription>;

    /// Unrounded goal time in seconds
    ///
    /// # Errors
    ///
    /// See [`PacePolicy::prescribe`].
    fn goal_seconds(
        &self,
        workout: &Workout,
        set: &SwimSet,
        swimmer: &Swimmer,
        rep_index: u32,
    ) -> AppResult<f64> {
        self.prescribe(workout, set, swimmer, rep_index)
            .map(|rep| rep.goal_seconds)
    }

    /// Rest in whole seconds
    ///
    /// # Errors
    ///
    /// See [`PacePolicy::prescribe`].
    fn rest_seconds(
        &self,
        workout: &Workout,
        set: &SwimSet,
        swimmer: &Swimmer,
        rep_index: u32,
    ) -> AppResult<i64> {
        self.prescribe(workout, set, swimmer, rep_index)
            .map(|rep| rep.rest_seconds)
    }

    /// Send-off in whole seconds
    ///
    /// # Errors
    ///
    /// See [`PacePolicy::prescribe`].
    fn interval_seconds(
        &self,
        workout: &Workout,
        set: &SwimSet,
        swimmer: &Swimmer,
        rep_index: u32,
    ) -> AppResult<i64> {
        self.prescribe(workout, set, swimmer, rep_index)
            .map(|rep| rep.interval_seconds)
    }

    /// Short display label; the rest figure is authoritative
    ///
    /// # Errors
    ///
    /// See [`PacePolicy::prescribe`].
    fn timing_label(
        &self,
        workout: &Workout,
        set: &SwimSet,
        swimmer: &Swimmer,
        rep_index: u32,
    ) -> AppResult<String> {
        self.prescribe(workout, set, swimmer, rep_index)
            .map(|rep| rep.label)
    }
}

/// Pace policy driven by [`PacingConfig`] rest curves
#[derive(Debug, Clone, Default)]
pub struct RestCurvePolicy {
    config: PacingConfig,
}

impl RestCurvePolicy {
    /// Policy over an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: PacingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Policy over defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override is unparsable or the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::new(PacingConfig::load()?)
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PacingConfig {
        &self.config
    }

    /// Goal computed from the seed, ignoring any override
    fn computed_goal_seconds(workout: &Workout, set: &SwimSet, speed_mps: f64) -> f64 {
        let distance = set.distance();
        let effort_multiplier = set.effort().map_or(1.0, |effort| effort.pace_multiplier());
        let distance_multiplier = match set.effort() {
            Some(effort) if effort.applies_distance_factor() => {
                DistanceFactors::for_distance(distance)
            }
            _ => 1.0,
        };
        let course_multiplier = workout.course().multiplier();
        let equipment_multiplier = set.equipment().combined_multiplier();

        (distance.to_meters() / speed_mps)
            * effort_multiplier
            * distance_multiplier
            * course_multiplier
            * equipment_multiplier
    }

    fn rest_fraction(&self, set: &SwimSet, seed: &SeedPace) -> f64 {
        let ratio = self
            .config
            .ratio
            .ratio(set.distance().to_meters(), seed.baseline_meters());
        self.config
            .rest_curves
            .percent(set.effort(), ratio, &self.config.ratio)
    }
}

/// Checks shared by every policy: rep index bounds, course and workout ownership
fn check_inputs(
    workout: &Workout,
    set: &SwimSet,
    swimmer: &Swimmer,
    rep_index: u32,
) -> AppResult<()> {
    if !(1..=set.reps()).contains(&rep_index) {
        return Err(AppError::invalid_input(format!(
            "repetition {rep_index} out of range 1..={}",
            set.reps()
        )));
    }
    if set.course() != workout.course() {
        return Err(AppError::invalid_input(format!(
            "set swum in {} cannot be paced in a {} workout",
            set.course(),
            workout.course()
        )));
    }
    if workout.swimmer_id() != swimmer.id() {
        return Err(AppError::invalid_input(format!(
            "workout '{}' does not belong to swimmer '{}'",
            workout.name(),
            swimmer.name()
        )));
    }
    Ok(())
}

/// Seconds rounded half away from zero, rejecting values outside `i64`
fn whole_seconds(seconds: f64, what: &str) -> AppResult<i64> {
    let rounded = seconds.round();
    if !rounded.is_finite() || rounded >= i64::MAX as f64 || rounded < i64::MIN as f64 {
        return Err(AppError::overflow(what));
    }
    Ok(rounded as i64)
}

/// Whole seconds as `m:ss`
fn clock(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    format!("{sign}{}:{:02}", total / 60, total % 60)
}

fn label(goal_seconds: f64, rest_seconds: i64, interval_seconds: i64) -> String {
    let goal = TimeSpan::from_seconds(goal_seconds)
        .map_or_else(|_| format!("{goal_seconds:.2}s"), |span| span.to_string());
    format!(
        "goal {goal} + {rest_seconds}s rest @ {}",
        clock(interval_seconds)
    )
}

impl PacePolicy for RestCurvePolicy {
    fn prescribe(
        &self,
        workout: &Workout,
        set: &SwimSet,
        swimmer: &Swimmer,
        rep_index: u32,
    ) -> AppResult<RepPrescription> {
        check_inputs(workout, set, swimmer, rep_index)?;

        let seed = swimmer.require_seed(set.stroke()).inspect_err(|_| {
            warn!(
                swimmer = swimmer.name(),
                stroke = %set.stroke(),
                "cannot pace set without a seed"
            );
        })?;
        let speed = seed.speed_mps();
        if !(speed.is_finite() && speed > 0.0) {
            return Err(AppError::invalid_input(format!(
                "seed pace for {} has no positive speed",
                set.stroke()
            )));
        }

        let goal_seconds = set.goal_override().map_or_else(
            || Self::computed_goal_seconds(workout, set, speed),
            TimeSpan::as_seconds,
        );
        let goal_rounded = whole_seconds(goal_seconds, "goal time")?;

        let (rest_seconds, interval_seconds) = if let Some(interval) = set.interval_override() {
            let interval_seconds = interval.as_whole_seconds();
            let rest_seconds = interval_seconds
                .checked_sub(goal_rounded)
                .ok_or_else(|| AppError::overflow("interval rest"))?;
            (rest_seconds.max(0), interval_seconds)
        } else {
            let fraction = self.rest_fraction(set, seed);
            let rest_seconds = whole_seconds(goal_rounded as f64 * fraction, "rest time")?.max(0);
            let interval_seconds = goal_rounded
                .checked_add(rest_seconds)
                .and_then(|raw| self.config.send_off.round(raw))
                .ok_or_else(|| AppError::overflow("send-off rounding"))?;
            (rest_seconds, interval_seconds)
        };

        debug!(
            stroke = %set.stroke(),
            distance = %set.distance(),
            rep_index,
            goal_seconds,
            rest_seconds,
            interval_seconds,
            "prescribed repetition"
        );

        Ok(RepPrescription {
            goal_seconds,
            goal_rounded,
            rest_seconds,
            interval_seconds,
            label: label(goal_seconds, rest_seconds, interval_seconds),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paceclock_core::errors::ErrorCode;
    use paceclock_core::models::{Course, Effort, SetGroup, StrokeType};
    use paceclock_core::units::Distance;

    fn fixture(set: SwimSet) -> (Workout, Swimmer) {
        let swimmer = Swimmer::new("Sam").with_seed(
            StrokeType::Freestyle,
            SeedPace::new(
                Distance::from_whole_yards(100).unwrap(),
                TimeSpan::from_whole_seconds(60).unwrap(),
            ),
        );
        let workout = Workout::new(swimmer.id(), "test", set.course())
            .with_group(SetGroup::new("main", 1).unwrap().with_set(set))
            .unwrap();
        (workout, swimmer)
    }

    fn fifties(effort: Option<Effort>) -> SwimSet {
        let builder = SwimSet::builder(
            StrokeType::Freestyle,
            4,
            Distance::from_whole_yards(50).unwrap(),
            Course::Scy,
        );
        match effort {
            Some(effort) => builder.effort(effort).build().unwrap(),
            None => builder.build().unwrap(),
        }
    }

    #[test]
    fn test_easy_fifties_from_minute_hundred() {
        let (workout, swimmer) = fixture(fifties(Some(Effort::Easy)));
        let set = &workout.groups()[0].sets()[0];
        let rep = RestCurvePolicy::default()
            .prescribe(&workout, set, &swimmer, 1)
            .unwrap();
        assert!((rep.goal_seconds - 46.5).abs() < 1e-9);
        assert_eq!(rep.goal_rounded, 47);
        assert_eq!(rep.rest_seconds, 5);
        assert_eq!(rep.interval_seconds, 50);
    }

    #[test]
    fn test_unset_effort_uses_flat_rest() {
        let (workout, swimmer) = fixture(fifties(None));
        let set = &workout.groups()[0].sets()[0];
        let rep = RestCurvePolicy::default()
            .prescribe(&workout, set, &swimmer, 1)
            .unwrap();
        // 30 s goal, 6% rest rounds to 2 s, 32 s rounds down to 30
        assert_eq!(rep.goal_rounded, 30);
        assert_eq!(rep.rest_seconds, 2);
        assert_eq!(rep.interval_seconds, 30);
    }

    #[test]
    fn test_rep_index_bounds() {
        let (workout, swimmer) = fixture(fifties(Some(Effort::Easy)));
        let set = &workout.groups()[0].sets()[0];
        let policy = RestCurvePolicy::default();
        assert!(policy.prescribe(&workout, set, &swimmer, 0).is_err());
        assert!(policy.prescribe(&workout, set, &swimmer, 4).is_ok());
        assert!(policy.prescribe(&workout, set, &swimmer, 5).is_err());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = PacingConfig::default();
        config.send_off.step_seconds = 0;
        assert!(matches!(
            RestCurvePolicy::new(config),
            Err(ConfigError::ValueOutOfRange(_))
        ));
        assert!(RestCurvePolicy::new(PacingConfig::default()).is_ok());
    }

    #[test]
    fn test_goal_beyond_i64_seconds_overflows() {
        let swimmer = Swimmer::new("Glacier").with_seed(
            StrokeType::Freestyle,
            SeedPace::new(
                Distance::from_units(1),
                TimeSpan::from_millis(i64::MAX / 2),
            ),
        );
        let workout = Workout::new(swimmer.id(), "slow", Course::Scy)
            .with_group(
                SetGroup::new("main", 1)
                    .unwrap()
                    .with_set(fifties(Some(Effort::Easy))),
            )
            .unwrap();
        let set = &workout.groups()[0].sets()[0];

        let err = RestCurvePolicy::default()
            .prescribe(&workout, set, &swimmer, 1)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ArithmeticOverflow);
    }

    #[test]
    fn test_whole_seconds_bounds() {
        assert_eq!(whole_seconds(46.5, "goal").unwrap(), 47);
        assert!(whole_seconds(f64::INFINITY, "goal").is_err());
        assert!(whole_seconds(1e19, "goal").is_err());
        assert!(whole_seconds(-1e19, "goal").is_err());
    }

    #[test]
    fn test_clock_format() {
        assert_eq!(clock(50), "0:50");
        assert_eq!(clock(125), "2:05");
    }
}
