// ABOUTME: Persistence round-trip tests for the workout tree and swimmer seeds
// ABOUTME: Verifies that deserialization re-validates and re-snaps entities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use paceclock_core::errors::ErrorCode;
use paceclock_core::models::{
    Course, Effort, Equipment, EquipmentSet, SeedPace, SetGroup, StrokeType, SwimSet, Swimmer,
    Workout,
};
use paceclock_core::units::{Distance, TimeSpan};
use serde_json::json;

fn sample_swimmer() -> Swimmer {
    Swimmer::new("Robin")
        .with_seed(
            StrokeType::Freestyle,
            SeedPace::new(
                Distance::from_whole_yards(100).unwrap(),
                "1:00".parse().unwrap(),
            ),
        )
        .with_seed(
            StrokeType::Butterfly,
            SeedPace::new(
                Distance::from_whole_meters(50).unwrap(),
                "32.4".parse().unwrap(),
            ),
        )
}

fn sample_workout(swimmer: &Swimmer) -> Workout {
    let main = SwimSet::builder(
        StrokeType::Freestyle,
        4,
        Distance::from_whole_yards(100).unwrap(),
        Course::Scy,
    )
    .effort(Effort::Threshold)
    .equipment(EquipmentSet::from_aids([Equipment::Paddles, Equipment::PullBuoy]))
    .note("hold pace")
    .build()
    .unwrap();
    let fly = SwimSet::builder(
        StrokeType::Butterfly,
        8,
        Distance::from_whole_yards(25).unwrap(),
        Course::Scy,
    )
    .effort(Effort::Sprint)
    .interval_override(TimeSpan::from_whole_seconds(30).unwrap())
    .build()
    .unwrap();

    Workout::new(swimmer.id(), "Thursday", Course::Scy)
        .with_default_between_group_rest(TimeSpan::from_whole_seconds(60).unwrap())
        .with_group(
            SetGroup::new("main", 2)
                .unwrap()
                .with_set(main)
                .with_rest_between_sets(TimeSpan::from_whole_seconds(15).unwrap()),
        )
        .unwrap()
        .with_group(SetGroup::new("speed", 1).unwrap().with_set(fly))
        .unwrap()
}

#[test]
fn test_workout_roundtrips_through_json() {
    let swimmer = sample_swimmer();
    let workout = sample_workout(&swimmer);

    let text = serde_json::to_string(&workout).unwrap();
    let restored: Workout = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, workout);
}

#[test]
fn test_swimmer_roundtrips_through_json() {
    let swimmer = sample_swimmer();
    let text = serde_json::to_string(&swimmer).unwrap();
    let restored: Swimmer = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, swimmer);
    assert_eq!(restored.seeds().count(), 2);
}

#[test]
fn test_deserialization_snaps_requested_distance() {
    let value = json!({
        "stroke": "freestyle",
        "reps": 2,
        "requested_distance": { "units": 750_000, "display_unit": "meters" },
        "course": "lcm"
    });
    let set: SwimSet = serde_json::from_value(value).unwrap();
    assert_eq!(set.distance(), Distance::from_whole_meters(100).unwrap());
    assert_eq!(set.requested_distance(), Distance::from_whole_meters(75).unwrap());
}

#[test]
fn test_deserialization_rejects_invalid_sets() {
    let zero_reps = json!({
        "stroke": "kick",
        "reps": 0,
        "requested_distance": { "units": 500_000 },
        "course": "scm"
    });
    assert!(serde_json::from_value::<SwimSet>(zero_reps).is_err());

    let odd_interval = json!({
        "stroke": "kick",
        "reps": 1,
        "requested_distance": { "units": 500_000 },
        "course": "scm",
        "interval_override": 52_000
    });
    assert!(serde_json::from_value::<SwimSet>(odd_interval).is_err());
}

#[test]
fn test_missing_seed_is_reported_with_code() {
    let swimmer = sample_swimmer();
    let err = swimmer.require_seed(StrokeType::Breaststroke).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingSeed);
    assert!(err.message.contains("Breaststroke"));
}
