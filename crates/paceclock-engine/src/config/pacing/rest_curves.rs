// ABOUTME: Rest-percent curve configuration per effort tier and the distance-ratio breakpoints
// ABOUTME: Evaluates the three-segment piecewise-linear rest curve for a distance ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use paceclock_core::constants::rest_curve;
use paceclock_core::models::Effort;
use serde::{Deserialize, Serialize};

/// One rest-percent curve, as fractions of the rounded goal time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestCurve {
    /// Flat value for ratios up to 1.0
    pub short: f64,
    /// Value reached at the interim break
    pub interim: f64,
    /// Value reached at the long clamp
    pub long: f64,
}

impl RestCurve {
    /// Curve through the three anchor values
    #[must_use]
    pub const fn new(short: f64, interim: f64, long: f64) -> Self {
        Self {
            short,
            interim,
            long,
        }
    }

    /// Rest fraction at distance ratio `ratio`.
    ///
    /// Flat up to 1.0, linear from `short` to `interim` up to the interim break,
    /// then linear towards `long`, reached at the long clamp and held beyond it.
    #[must_use]
    pub fn percent_at(&self, ratio: f64, breaks: &RatioConfig) -> f64 {
        if ratio <= 1.0 {
            return self.short;
        }
        if ratio <= breaks.interim_break {
            let progress = (ratio - 1.0) / (breaks.interim_break - 1.0);
            return self.short + (self.interim - self.short) * progress;
        }
        let clamped = ratio.min(breaks.long_clamp);
        let progress =
            (clamped - breaks.interim_break) / (breaks.long_clamp - breaks.interim_break);
        self.interim + (self.long - self.interim) * progress
    }

    pub(super) fn anchors(&self) -> [f64; 3] {
        [self.short, self.interim, self.long]
    }
}

/// Rest curves for every effort tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestCurvesConfig {
    /// Easy (recovery tier)
    pub easy: RestCurve,
    /// Endurance (recovery tier)
    pub endurance: RestCurve,
    /// Threshold tier
    pub threshold: RestCurve,
    /// Race-pace, VO2-max and sprint
    pub high_intensity: RestCurve,
    /// Flat fraction for sets without an effort tier
    pub unset_effort_percent: f64,
}

impl Default for RestCurvesConfig {
    fn default() -> Self {
        Self {
            easy: RestCurve::new(
                rest_curve::EASY_SHORT,
                rest_curve::EASY_INTERIM,
                rest_curve::EASY_LONG,
            ),
            endurance: RestCurve::new(
                rest_curve::ENDURANCE_SHORT,
                rest_curve::ENDURANCE_INTERIM,
                rest_curve::ENDURANCE_LONG,
            ),
            threshold: RestCurve::new(
                rest_curve::THRESHOLD_SHORT,
                rest_curve::THRESHOLD_INTERIM,
                rest_curve::THRESHOLD_LONG,
            ),
            high_intensity: RestCurve::new(
                rest_curve::HIGH_INTENSITY_SHORT,
                rest_curve::HIGH_INTENSITY_INTERIM,
                rest_curve::HIGH_INTENSITY_LONG,
            ),
            unset_effort_percent: rest_curve::UNSET_EFFORT,
        }
    }
}

impl RestCurvesConfig {
    /// Curve used for `effort`; `None` for sets without an effort tier
    #[must_use]
    pub fn curve_for(&self, effort: Option<Effort>) -> Option<&RestCurve> {
        let curve = match effort? {
            Effort::Easy => &self.easy,
            Effort::Endurance => &self.endurance,
            Effort::Threshold => &self.threshold,
            Effort::RacePace | Effort::Vo2Max | Effort::Sprint => &self.high_intensity,
        };
        Some(curve)
    }

    /// Rest fraction for `effort` at distance ratio `ratio`
    #[must_use]
    pub fn percent(&self, effort: Option<Effort>, ratio: f64, breaks: &RatioConfig) -> f64 {
        self.curve_for(effort)
            .map_or(self.unset_effort_percent, |curve| {
                curve.percent_at(ratio, breaks)
            })
    }
}

/// Distance-ratio breakpoints shared by every curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioConfig {
    /// Lower bound applied to the ratio
    pub min_ratio: f64,
    /// End of the short-to-interim segment
    pub interim_break: f64,
    /// Ratio past which curves are flat
    pub long_clamp: f64,
    /// Baseline distance used when a seed has none (meters)
    pub fallback_baseline_meters: f64,
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            min_ratio: rest_curve::MIN_RATIO,
            interim_break: rest_curve::INTERIM_BREAK,
            long_clamp: rest_curve::LONG_CLAMP,
            fallback_baseline_meters: rest_curve::FALLBACK_BASELINE_METERS,
        }
    }
}

impl RatioConfig {
    /// Repeat distance over seed baseline, floored at `min_ratio`
    #[must_use]
    pub fn ratio(&self, rep_meters: f64, baseline_meters: f64) -> f64 {
        let baseline = if baseline_meters > 0.0 {
            baseline_meters
        } else {
            self.fallback_baseline_meters
        };
        (rep_meters / baseline).max(self.min_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_easy_curve_segments() {
        let curves = RestCurvesConfig::default();
        let breaks = RatioConfig::default();
        let easy = Some(Effort::Easy);
        assert!(close(curves.percent(easy, 0.5, &breaks), 0.10));
        assert!(close(curves.percent(easy, 1.0, &breaks), 0.10));
        // a third of the way from 1 to 4
        assert!(close(curves.percent(easy, 2.0, &breaks), 0.10 + 0.08 / 3.0));
        assert!(close(curves.percent(easy, 4.0, &breaks), 0.18));
        assert!(close(curves.percent(easy, 15.0, &breaks), 0.05));
        assert!(close(curves.percent(easy, 40.0, &breaks), 0.05));
    }

    #[test]
    fn test_every_tier_interpolates_both_segments() {
        let curves = RestCurvesConfig::default();
        let breaks = RatioConfig::default();
        // (effort, ratio, expected): 2.5 and 9.5 sit halfway along each segment
        let cases = [
            (Effort::Easy, 2.5, 0.14),
            (Effort::Easy, 9.5, 0.115),
            (Effort::Endurance, 2.5, 0.045),
            (Effort::Endurance, 4.0, 0.05),
            (Effort::Endurance, 9.5, 0.0475),
            (Effort::Endurance, 15.0, 0.045),
            (Effort::Endurance, 30.0, 0.045),
            (Effort::Threshold, 2.5, 0.061),
            (Effort::Threshold, 4.0, 0.055),
            (Effort::Threshold, 9.5, 0.0475),
            (Effort::Threshold, 15.0, 0.040),
            (Effort::Threshold, 20.0, 0.040),
            (Effort::Sprint, 2.5, 0.475),
            (Effort::Sprint, 4.0, 0.25),
            (Effort::Sprint, 9.5, 0.15),
            (Effort::Sprint, 15.0, 0.05),
            (Effort::Sprint, 100.0, 0.05),
        ];
        for (effort, ratio, expected) in cases {
            let actual = curves.percent(Some(effort), ratio, &breaks);
            assert!(
                close(actual, expected),
                "{effort:?} at {ratio}: {actual} != {expected}"
            );
        }
    }

    #[test]
    fn test_tiers_map_to_curves() {
        let curves = RestCurvesConfig::default();
        let breaks = RatioConfig::default();
        for effort in [Effort::RacePace, Effort::Vo2Max, Effort::Sprint] {
            assert!(close(curves.percent(Some(effort), 1.0, &breaks), 0.70));
        }
        assert!(close(curves.percent(Some(Effort::Threshold), 1.0, &breaks), 0.067));
        assert!(close(curves.percent(Some(Effort::Endurance), 1.0, &breaks), 0.04));
        assert!(close(curves.percent(None, 9.0, &breaks), 0.06));
    }

    #[test]
    fn test_ratio_floor_and_fallback_baseline() {
        let breaks = RatioConfig::default();
        assert!(close(breaks.ratio(5.0, 100.0), 0.1));
        assert!(close(breaks.ratio(200.0, 0.0), 2.0));
        assert!(close(breaks.ratio(200.0, -3.0), 2.0));
    }
}
