// ABOUTME: Set pacing command for paceclock-cli
// ABOUTME: Builds a one-set workout for a one-stroke swimmer and reports per-rep and total figures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use paceclock::models::{
    Course, Effort, Equipment, EquipmentSet, SeedPace, SetGroup, StrokeType, SwimSet, Swimmer,
    Workout,
};
use paceclock::units::{DisplayUnit, Distance, TimeSpan};
use paceclock::{PacePolicy, RepPrescription, RestCurvePolicy, WorkoutCalculator};
use serde::Serialize;
use tracing::info;

use crate::helpers::display::{display_set_report, print_json};

/// Parsed `set` arguments
pub struct SetRequest {
    pub stroke: StrokeType,
    pub reps: u32,
    pub distance: f64,
    pub unit: DisplayUnit,
    pub course: Course,
    pub effort: Option<Effort>,
    pub equipment: Vec<Equipment>,
    pub seed_distance: f64,
    pub seed_unit: DisplayUnit,
    pub seed_time: TimeSpan,
    pub goal: Option<TimeSpan>,
    pub interval: Option<TimeSpan>,
}

/// Figures printed for one set
#[derive(Debug, Serialize)]
pub struct SetReport {
    pub stroke: StrokeType,
    pub course: Course,
    pub effort: Option<Effort>,
    pub equipment: Vec<Equipment>,
    pub reps: u32,
    pub requested_distance: Distance,
    pub distance_per_rep: Distance,
    pub seed: SeedPace,
    pub prescription: RepPrescription,
    pub total_distance: Distance,
    pub swim_time: TimeSpan,
    pub rest_time: TimeSpan,
    pub total_time: TimeSpan,
}

/// Compute and print one set
pub fn run(request: &SetRequest, json: bool) -> Result<()> {
    let report = build_report(request)?;
    info!(
        stroke = %report.stroke,
        reps = report.reps,
        interval = report.prescription.interval_seconds,
        "set computed"
    );

    if json {
        print_json(&report)?;
    } else {
        display_set_report(&report);
    }
    Ok(())
}

fn build_report(request: &SetRequest) -> Result<SetReport> {
    let seed = SeedPace::new(
        Distance::from_value(request.seed_distance, request.seed_unit)?,
        request.seed_time,
    );
    let swimmer = Swimmer::new("cli").with_seed(request.stroke, seed);

    let set = build_set(request)?;
    let workout = Workout::new(swimmer.id(), "cli", request.course)
        .with_group(SetGroup::new("set", 1)?.with_set(set))?;

    let calculator = WorkoutCalculator::new(RestCurvePolicy::load()?);
    let set = workout
        .groups()
        .first()
        .and_then(|group| group.sets().first())
        .ok_or_else(|| anyhow!("workout has no set"))?;

    let prescription = calculator.policy().prescribe(&workout, set, &swimmer, 1)?;
    let totals = calculator.workout_totals(&workout, &swimmer)?;

    Ok(SetReport {
        stroke: set.stroke(),
        course: set.course(),
        effort: set.effort(),
        equipment: set.equipment().aids().collect(),
        reps: set.reps(),
        requested_distance: set.requested_distance(),
        distance_per_rep: set.distance(),
        seed,
        prescription,
        total_distance: totals.distance,
        swim_time: totals.swim_time,
        rest_time: totals.intra_group_rest,
        total_time: totals.total_time,
    })
}

fn build_set(request: &SetRequest) -> Result<SwimSet> {
    let mut builder = SwimSet::builder(
        request.stroke,
        request.reps,
        Distance::from_value(request.distance, request.unit)?,
        request.course,
    )
    .equipment(EquipmentSet::from_aids(request.equipment.iter().copied()));

    if let Some(effort) = request.effort {
        builder = builder.effort(effort);
    }
    if let Some(goal) = request.goal {
        builder = builder.goal_override(goal);
    }
    if let Some(interval) = request.interval {
        builder = builder.interval_override(interval);
    }
    Ok(builder.build()?)
}
