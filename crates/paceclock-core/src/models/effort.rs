// ABOUTME: Effort intensity tiers and their pace/rest parameter records
// ABOUTME: Maps each tier to a legacy pace multiplier, rest allowance, and rest-curve tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::effort;
use crate::errors::AppError;

/// Training intensity of a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    /// Recovery swimming
    Easy,
    /// Aerobic base work
    Endurance,
    /// Lactate threshold
    Threshold,
    /// Target race pace
    RacePace,
    /// Maximal aerobic
    Vo2Max,
    /// All-out
    Sprint,
}

/// Which rest-percent curve an effort follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestTier {
    /// Easy and Endurance; no distance factor on the goal
    Recovery,
    /// Threshold
    Threshold,
    /// Race-Pace, VO2-Max and Sprint
    HighIntensity,
}

/// Parameters attached to an [`Effort`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffortSpec {
    /// Display label
    pub label: &'static str,
    /// Multiplier applied to the seed-derived goal time
    pub pace_multiplier: f64,
    /// Legacy rest allowance in seconds; not used by the rest-percent curves
    pub rest_allowance_sec: u32,
    /// Rest curve membership
    pub rest_tier: RestTier,
}

static EASY: EffortSpec = EffortSpec {
    label: "Easy",
    pace_multiplier: effort::EASY_PACE,
    rest_allowance_sec: effort::EASY_REST_ALLOWANCE_SEC,
    rest_tier: RestTier::Recovery,
};
static ENDURANCE: EffortSpec = EffortSpec {
    label: "Endurance",
    pace_multiplier: effort::ENDURANCE_PACE,
    rest_allowance_sec: effort::ENDURANCE_REST_ALLOWANCE_SEC,
    rest_tier: RestTier::Recovery,
};
static THRESHOLD: EffortSpec = EffortSpec {
    label: "Threshold",
    pace_multiplier: effort::THRESHOLD_PACE,
    rest_allowance_sec: effort::THRESHOLD_REST_ALLOWANCE_SEC,
    rest_tier: RestTier::Threshold,
};
static RACE_PACE: EffortSpec = EffortSpec {
    label: "Race Pace",
    pace_multiplier: effort::RACE_PACE_PACE,
    rest_allowance_sec: effort::RACE_PACE_REST_ALLOWANCE_SEC,
    rest_tier: RestTier::HighIntensity,
};
static VO2_MAX: EffortSpec = EffortSpec {
    label: "VO2 Max",
    pace_multiplier: effort::VO2_MAX_PACE,
    rest_allowance_sec: effort::VO2_MAX_REST_ALLOWANCE_SEC,
    rest_tier: RestTier::HighIntensity,
};
static SPRINT: EffortSpec = EffortSpec {
    label: "Sprint",
    pace_multiplier: effort::SPRINT_PACE,
    rest_allowance_sec: effort::SPRINT_REST_ALLOWANCE_SEC,
    rest_tier: RestTier::HighIntensity,
};

impl Effort {
    /// Every effort, easiest first
    pub const ALL: [Self; 6] = [
        Self::Easy,
        Self::Endurance,
        Self::Threshold,
        Self::RacePace,
        Self::Vo2Max,
        Self::Sprint,
    ];

    /// Parameter record for this effort
    #[must_use]
    pub fn spec(self) -> &'static EffortSpec {
        match self {
            Self::Easy => &EASY,
            Self::Endurance => &ENDURANCE,
            Self::Threshold => &THRESHOLD,
            Self::RacePace => &RACE_PACE,
            Self::Vo2Max => &VO2_MAX,
            Self::Sprint => &SPRINT,
        }
    }

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Legacy pace multiplier applied to the goal time
    #[must_use]
    pub fn pace_multiplier(self) -> f64 {
        self.spec().pace_multiplier
    }

    /// Legacy rest allowance in seconds
    #[must_use]
    pub fn rest_allowance_sec(self) -> u32 {
        self.spec().rest_allowance_sec
    }

    /// Rest-curve tier
    #[must_use]
    pub fn rest_tier(self) -> RestTier {
        self.spec().rest_tier
    }

    /// Whether the goal time is scaled by the per-distance factor
    #[must_use]
    pub fn applies_distance_factor(self) -> bool {
        self.rest_tier() != RestTier::Recovery
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Effort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "easy" | "recovery" => Ok(Self::Easy),
            "endurance" | "aerobic" => Ok(Self::Endurance),
            "threshold" => Ok(Self::Threshold),
            "racepace" | "race" | "rp" => Ok(Self::RacePace),
            "vo2max" | "vo2" => Ok(Self::Vo2Max),
            "sprint" => Ok(Self::Sprint),
            _ => Err(AppError::invalid_format(format!("unknown effort '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_factor_only_for_hard_efforts() {
        assert!(!Effort::Easy.applies_distance_factor());
        assert!(!Effort::Endurance.applies_distance_factor());
        assert!(Effort::Threshold.applies_distance_factor());
        assert!(Effort::Sprint.applies_distance_factor());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Race-Pace".parse::<Effort>().unwrap(), Effort::RacePace);
        assert_eq!("VO2 max".parse::<Effort>().unwrap(), Effort::Vo2Max);
        assert_eq!("vo2_max".parse::<Effort>().unwrap(), Effort::Vo2Max);
        assert!("moderate".parse::<Effort>().is_err());
    }
}
