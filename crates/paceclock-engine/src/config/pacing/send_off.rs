// ABOUTME: Send-off rounding policy that places intervals on a fixed clock step
// ABOUTME: Remainders below the threshold round down, the rest round up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use paceclock_core::constants::send_off;
use serde::{Deserialize, Serialize};

/// Send-off rounding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOffConfig {
    /// Clock step in seconds
    pub step_seconds: i64,
    /// Remainders at or above this round up
    pub round_up_threshold: i64,
}

impl Default for SendOffConfig {
    fn default() -> Self {
        Self {
            step_seconds: send_off::STEP_SECONDS,
            round_up_threshold: send_off::ROUND_UP_THRESHOLD,
        }
    }
}

impl SendOffConfig {
    /// Round `raw_seconds` onto the clock step.
    ///
    /// With the default 5 s step and threshold 3: 52 becomes 50, 53 becomes 55.
    /// `None` when the step is not positive or the rounded value does not fit.
    #[must_use]
    pub fn round(&self, raw_seconds: i64) -> Option<i64> {
        if self.step_seconds <= 0 {
            return None;
        }
        let remainder = raw_seconds.checked_rem_euclid(self.step_seconds)?;
        if remainder < self.round_up_threshold {
            raw_seconds.checked_sub(remainder)
        } else {
            raw_seconds.checked_add(self.step_seconds - remainder)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rounding_threshold() {
        let policy = SendOffConfig::default();
        assert_eq!(policy.round(50), Some(50));
        assert_eq!(policy.round(51), Some(50));
        assert_eq!(policy.round(52), Some(50));
        assert_eq!(policy.round(53), Some(55));
        assert_eq!(policy.round(54), Some(55));
        assert_eq!(policy.round(0), Some(0));
    }

    #[test]
    fn test_zero_step_does_not_round() {
        let policy = SendOffConfig {
            step_seconds: 0,
            round_up_threshold: 3,
        };
        assert_eq!(policy.round(52), None);
    }

    #[test]
    fn test_rounding_past_i64_bounds_is_none() {
        let policy = SendOffConfig::default();
        // i64::MIN leaves remainder 2, so rounding down would go below the minimum
        assert_eq!(policy.round(i64::MIN), None);
        assert_eq!(policy.round(i64::MAX - 4), Some(i64::MAX - 2));
    }
}
