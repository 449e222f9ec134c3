// ABOUTME: Distance-bucket pace multipliers for hard efforts
// ABOUTME: Buckets a per-rep distance to the smallest bucket at or above it in meters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::DISTANCE_FACTOR_BUCKETS;
use crate::units::Distance;

/// Lookup over [`DISTANCE_FACTOR_BUCKETS`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceFactors;

impl DistanceFactors {
    /// `(bucket meters, multiplier)` pairs, ascending
    #[must_use]
    pub const fn buckets() -> &'static [(u32, f64)] {
        &DISTANCE_FACTOR_BUCKETS
    }

    /// Multiplier for a per-rep distance.
    ///
    /// The distance is rounded to whole meters and matched to the smallest bucket
    /// that is at least that long; anything past the largest bucket uses it.
    #[must_use]
    pub fn for_distance(distance: Distance) -> f64 {
        let meters = distance.to_meters().round();
        DISTANCE_FACTOR_BUCKETS
            .iter()
            .find(|(bucket, _)| f64::from(*bucket) >= meters)
            .or_else(|| DISTANCE_FACTOR_BUCKETS.last())
            .map_or(1.0, |(_, factor)| *factor)
    }
}
