// ABOUTME: Course snap command for paceclock-cli
// ABOUTME: Rounds a requested repeat distance up to whole pool lengths of a course
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use paceclock::models::Course;
use paceclock::units::{DisplayUnit, Distance};
use serde::Serialize;

use crate::helpers::display::{display_snap_report, print_json};

/// Requested and snapped distance for one course
#[derive(Debug, Serialize)]
pub struct SnapReport {
    pub course: Course,
    pub requested: Distance,
    pub snapped: Distance,
    pub pool_length: Distance,
    pub lengths: i64,
}

/// Snap `distance` to `course` and print the result
pub fn run(distance: f64, unit: DisplayUnit, course: Course, json: bool) -> Result<()> {
    let requested = Distance::from_value(distance, unit)?;
    let pool_length = course.pool_length();
    let snapped = requested
        .snap_up_to_course_multiple(course)?
        .re_tagged(course.native_unit());

    let report = SnapReport {
        course,
        requested,
        snapped,
        pool_length,
        lengths: snapped.units() / pool_length.units(),
    };

    if json {
        print_json(&report)?;
    } else {
        display_snap_report(&report);
    }
    Ok(())
}
