// ABOUTME: Pool configuration tags (SCY, SCM, LCM) and their parameter records
// ABOUTME: Each course maps to an exact pool length and a turn-frequency pace multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::course::{
    LCM_MULTIPLIER, LCM_POOL_UNITS, SCM_MULTIPLIER, SCM_POOL_UNITS, SCY_MULTIPLIER,
    SCY_POOL_UNITS,
};
use crate::errors::AppError;
use crate::units::{DisplayUnit, Distance};

/// Pool configuration a workout is swum in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    /// Short course yards (25 yd)
    Scy,
    /// Short course meters (25 m)
    Scm,
    /// Long course meters (50 m)
    Lcm,
}

/// Parameters attached to a [`Course`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseSpec {
    /// Short label ("SCY", "SCM", "LCM")
    pub label: &'static str,
    /// Exact length of one pool length
    pub pool_length: Distance,
    /// Pace multiplier reflecting turn frequency
    pub multiplier: f64,
}

static SCY: CourseSpec = CourseSpec {
    label: "SCY",
    pool_length: Distance::from_units_in(SCY_POOL_UNITS, DisplayUnit::Yards),
    multiplier: SCY_MULTIPLIER,
};

static SCM: CourseSpec = CourseSpec {
    label: "SCM",
    pool_length: Distance::from_units_in(SCM_POOL_UNITS, DisplayUnit::Meters),
    multiplier: SCM_MULTIPLIER,
};

static LCM: CourseSpec = CourseSpec {
    label: "LCM",
    pool_length: Distance::from_units_in(LCM_POOL_UNITS, DisplayUnit::Meters),
    multiplier: LCM_MULTIPLIER,
};

impl Course {
    /// Every course, in declaration order
    pub const ALL: [Self; 3] = [Self::Scy, Self::Scm, Self::Lcm];

    /// Parameter record for this course
    #[must_use]
    pub fn spec(self) -> &'static CourseSpec {
        match self {
            Self::Scy => &SCY,
            Self::Scm => &SCM,
            Self::Lcm => &LCM,
        }
    }

    /// Exact pool length
    #[must_use]
    pub fn pool_length(self) -> Distance {
        self.spec().pool_length
    }

    /// Turn-frequency pace multiplier
    #[must_use]
    pub fn multiplier(self) -> f64 {
        self.spec().multiplier
    }

    /// Short label
    #[must_use]
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Natural display unit for distances swum in this course
    #[must_use]
    pub fn native_unit(self) -> DisplayUnit {
        self.pool_length().display_unit()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scy" | "short course yards" => Ok(Self::Scy),
            "scm" | "short course meters" | "short course metres" => Ok(Self::Scm),
            "lcm" | "long course meters" | "long course metres" => Ok(Self::Lcm),
            other => Err(AppError::invalid_format(format!(
                "unknown course '{other}' (expected scy, scm or lcm)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_lengths_are_exact() {
        assert_eq!(Course::Scy.pool_length().units(), 228_600);
        assert_eq!(Course::Scm.pool_length().units(), 250_000);
        assert_eq!(Course::Lcm.pool_length().units(), 500_000);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LCM".parse::<Course>().unwrap(), Course::Lcm);
        assert_eq!(" scy ".parse::<Course>().unwrap(), Course::Scy);
        assert!("olympic".parse::<Course>().is_err());
    }
}
