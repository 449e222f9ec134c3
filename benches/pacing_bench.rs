// ABOUTME: Criterion benchmarks for the pacing engine
// ABOUTME: Measures per-rep prescription, workout totals, and full per-rep planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the pacing engine.
//!
//! Measures single-rep prescription across efforts and the cost of rolling a
//! policy up workouts of increasing size.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use paceclock::models::{
    Course, Effort, Equipment, EquipmentSet, SeedPace, SetGroup, StrokeType, SwimSet, Swimmer,
    Workout,
};
use paceclock::units::{Distance, TimeSpan};
use paceclock::{PacePolicy, RestCurvePolicy, WorkoutCalculator};

const EFFORTS: [Effort; 6] = [
    Effort::Easy,
    Effort::Endurance,
    Effort::Threshold,
    Effort::RacePace,
    Effort::Vo2Max,
    Effort::Sprint,
];

fn bench_swimmer() -> Swimmer {
    let seed = |yards, seconds| {
        SeedPace::new(
            Distance::from_whole_yards(yards).unwrap(),
            TimeSpan::from_seconds(seconds).unwrap(),
        )
    };
    Swimmer::new("bench")
        .with_seed(StrokeType::Freestyle, seed(100, 62.0))
        .with_seed(StrokeType::Backstroke, seed(100, 71.5))
        .with_seed(StrokeType::Butterfly, seed(50, 31.0))
        .with_seed(StrokeType::Kick, seed(100, 95.0))
}

/// Workout with `groups` groups of three sets each, cycling strokes and efforts
fn generate_workout(swimmer: &Swimmer, groups: usize) -> Workout {
    const STROKES: [StrokeType; 4] = [
        StrokeType::Freestyle,
        StrokeType::Backstroke,
        StrokeType::Butterfly,
        StrokeType::Kick,
    ];
    let workout = Workout::new(swimmer.id(), "bench", Course::Scy)
        .with_default_between_group_rest(TimeSpan::from_whole_seconds(30).unwrap());

    (0..groups).fold(workout, |workout, group_index| {
        let group = (0..3).fold(
            SetGroup::new(format!("group {group_index}"), 2)
                .unwrap()
                .with_rest_between_sets(TimeSpan::from_whole_seconds(15).unwrap()),
            |group, set_index| {
                let index = group_index * 3 + set_index;
                let yards = [25, 50, 75, 100, 200][index % 5];
                let equipment = if index % 4 == 0 {
                    EquipmentSet::from_aids([Equipment::Paddles, Equipment::PullBuoy])
                } else {
                    EquipmentSet::empty()
                };
                let set = SwimSet::builder(
                    STROKES[index % STROKES.len()],
                    4,
                    Distance::from_whole_yards(yards).unwrap(),
                    Course::Scy,
                )
                .effort(EFFORTS[index % EFFORTS.len()])
                .equipment(equipment)
                .build()
                .unwrap();
                group.with_set(set)
            },
        );
        workout.with_group(group).unwrap()
    })
}

fn bench_prescribe(c: &mut Criterion) {
    let mut group = c.benchmark_group("prescribe");
    let swimmer = bench_swimmer();
    let policy = RestCurvePolicy::default();

    for effort in EFFORTS {
        let set = SwimSet::builder(
            StrokeType::Freestyle,
            8,
            Distance::from_whole_yards(100).unwrap(),
            Course::Scy,
        )
        .effort(effort)
        .build()
        .unwrap();
        let workout = Workout::new(swimmer.id(), "single", Course::Scy)
            .with_group(SetGroup::new("main", 1).unwrap().with_set(set))
            .unwrap();
        let set = &workout.groups()[0].sets()[0];

        group.bench_with_input(BenchmarkId::new("effort", effort), &effort, |b, _| {
            b.iter(|| {
                policy
                    .prescribe(black_box(&workout), black_box(set), &swimmer, 1)
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_workout_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("workout_totals");
    let swimmer = bench_swimmer();
    let calculator = WorkoutCalculator::new(RestCurvePolicy::default());

    for size in [1_usize, 10, 50] {
        let workout = generate_workout(&swimmer, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("groups", size), &workout, |b, workout| {
            b.iter(|| {
                calculator
                    .workout_totals(black_box(workout), &swimmer)
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_plan_workout(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_workout");
    let swimmer = bench_swimmer();
    let calculator = WorkoutCalculator::new(RestCurvePolicy::default());

    for size in [10_usize, 50] {
        let workout = generate_workout(&swimmer, size);
        group.bench_with_input(BenchmarkId::new("groups", size), &workout, |b, workout| {
            b.iter(|| calculator.plan_workout(black_box(workout), &swimmer).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_prescribe,
    bench_workout_totals,
    bench_plan_workout
);
criterion_main!(benches);
