// ABOUTME: A swimmer's demonstrated pace for one stroke (baseline distance and time)
// ABOUTME: Derives the canonical speed in meters per second with a 0.0 sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::units::MILLIS_PER_SECOND;
use crate::units::{Distance, TimeSpan};

/// Baseline distance swum in a baseline time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPace {
    distance: Distance,
    time: TimeSpan,
}

impl SeedPace {
    /// Pair a baseline distance with the time it took
    #[must_use]
    pub const fn new(distance: Distance, time: TimeSpan) -> Self {
        Self { distance, time }
    }

    /// Baseline distance
    #[must_use]
    pub const fn distance(&self) -> Distance {
        self.distance
    }

    /// Baseline time
    #[must_use]
    pub const fn time(&self) -> TimeSpan {
        self.time
    }

    /// Baseline distance in meters
    #[must_use]
    pub fn baseline_meters(&self) -> f64 {
        self.distance.to_meters()
    }

    /// Speed in m/s; `0.0` when the baseline time is not positive
    #[must_use]
    pub fn speed_mps(&self) -> f64 {
        let millis = self.time.as_millis();
        if millis <= 0 {
            return 0.0;
        }
        self.distance.to_meters() / (millis as f64 / MILLIS_PER_SECOND as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_from_hundred_yards_in_a_minute() {
        let seed = SeedPace::new(
            Distance::from_whole_yards(100).unwrap(),
            TimeSpan::from_whole_seconds(60).unwrap(),
        );
        assert!((seed.speed_mps() - 1.524).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_time_gives_zero_speed() {
        let distance = Distance::from_whole_meters(100).unwrap();
        assert!(SeedPace::new(distance, TimeSpan::ZERO).speed_mps().abs() < f64::EPSILON);
        assert!(
            SeedPace::new(distance, TimeSpan::from_millis(-5))
                .speed_mps()
                .abs()
                < f64::EPSILON
        );
    }
}
