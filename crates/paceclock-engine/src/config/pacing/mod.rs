// ABOUTME: Pacing configuration: rest curves, ratio breakpoints, and send-off rounding
// ABOUTME: Loads defaults, applies PACECLOCK_* environment overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pacing Configuration Module
//!
//! Every tunable number the pace policy uses lives here. `PacingConfig::default()`
//! reproduces the standard tables; `PacingConfig::load()` layers environment
//! overrides on top and validates the result.
//!
//! # Environment overrides
//!
//! | Variable | Field |
//! |---|---|
//! | `PACECLOCK_REST_{EASY,ENDURANCE,THRESHOLD,HIGH_INTENSITY}_{SHORT,INTERIM,LONG}` | curve anchors |
//! | `PACECLOCK_REST_UNSET_EFFORT` | flat fraction without an effort tier |
//! | `PACECLOCK_RATIO_MIN` | lower bound on the distance ratio |
//! | `PACECLOCK_RATIO_INTERIM_BREAK` | end of the first sloped segment |
//! | `PACECLOCK_RATIO_LONG_CLAMP` | end of the second sloped segment |
//! | `PACECLOCK_RATIO_FALLBACK_BASELINE_METERS` | baseline for seeds without distance |
//! | `PACECLOCK_SEND_OFF_STEP_SECONDS` | clock step |
//! | `PACECLOCK_SEND_OFF_ROUND_UP_THRESHOLD` | round-up remainder |

pub mod error;
pub mod rest_curves;
pub mod send_off;

pub use error::ConfigError;
pub use rest_curves::{RatioConfig, RestCurve, RestCurvesConfig};
pub use send_off::SendOffConfig;

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use tracing::debug;

/// Main pacing configuration container
///
/// Deserialized values are validated; missing sections take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "PacingConfigRecord")]
pub struct PacingConfig {
    /// Rest-percent curves per effort tier
    pub rest_curves: RestCurvesConfig,
    /// Distance-ratio breakpoints
    pub ratio: RatioConfig,
    /// Send-off rounding
    pub send_off: SendOffConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct PacingConfigRecord {
    #[serde(default)]
    rest_curves: RestCurvesConfig,
    #[serde(default)]
    ratio: RatioConfig,
    #[serde(default)]
    send_off: SendOffConfig,
}

impl TryFrom<PacingConfigRecord> for PacingConfig {
    type Error = ConfigError;

    fn try_from(record: PacingConfigRecord) -> Result<Self, ConfigError> {
        let config = Self {
            rest_curves: record.rest_curves,
            ratio: record.ratio,
            send_off: record.send_off,
        };
        config.validate()?;
        Ok(config)
    }
}

impl PacingConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "pacing configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first constraint that does not hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let curves = &self.rest_curves;
        let anchors = [
            curves.easy.anchors(),
            curves.endurance.anchors(),
            curves.threshold.anchors(),
            curves.high_intensity.anchors(),
        ];
        let percent_ok = |value: f64| value.is_finite() && (0.0..=1.0).contains(&value);
        if !anchors.iter().flatten().copied().all(percent_ok)
            || !percent_ok(curves.unset_effort_percent)
        {
            return Err(ConfigError::ValueOutOfRange(
                "rest percentages must be within 0.0..=1.0",
            ));
        }

        let ratio = &self.ratio;
        if !(ratio.min_ratio.is_finite() && ratio.min_ratio > 0.0) {
            return Err(ConfigError::ValueOutOfRange("min_ratio must be > 0"));
        }
        if !(ratio.interim_break > 1.0 && ratio.interim_break < ratio.long_clamp) {
            return Err(ConfigError::InvalidRange(
                "ratio breakpoints must satisfy 1 < interim_break < long_clamp",
            ));
        }
        if !ratio.long_clamp.is_finite() {
            return Err(ConfigError::ValueOutOfRange("long_clamp must be finite"));
        }
        if !(ratio.fallback_baseline_meters.is_finite() && ratio.fallback_baseline_meters > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "fallback_baseline_meters must be > 0",
            ));
        }

        let send_off = &self.send_off;
        if send_off.step_seconds <= 0 {
            return Err(ConfigError::ValueOutOfRange("step_seconds must be > 0"));
        }
        if send_off.round_up_threshold <= 0 || send_off.round_up_threshold > send_off.step_seconds
        {
            return Err(ConfigError::InvalidRange(
                "round_up_threshold must be within 1..=step_seconds",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn apply_curve_env(prefix: &str, curve: &mut RestCurve) -> Result<(), ConfigError> {
        Self::apply_env_var(&format!("{prefix}_SHORT"), &mut curve.short)?;
        Self::apply_env_var(&format!("{prefix}_INTERIM"), &mut curve.interim)?;
        Self::apply_env_var(&format!("{prefix}_LONG"), &mut curve.long)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Rest curves
        Self::apply_curve_env("PACECLOCK_REST_EASY", &mut self.rest_curves.easy)?;
        Self::apply_curve_env("PACECLOCK_REST_ENDURANCE", &mut self.rest_curves.endurance)?;
        Self::apply_curve_env("PACECLOCK_REST_THRESHOLD", &mut self.rest_curves.threshold)?;
        Self::apply_curve_env(
            "PACECLOCK_REST_HIGH_INTENSITY",
            &mut self.rest_curves.high_intensity,
        )?;
        Self::apply_env_var(
            "PACECLOCK_REST_UNSET_EFFORT",
            &mut self.rest_curves.unset_effort_percent,
        )?;

        // Ratio breakpoints
        Self::apply_env_var("PACECLOCK_RATIO_MIN", &mut self.ratio.min_ratio)?;
        Self::apply_env_var(
            "PACECLOCK_RATIO_INTERIM_BREAK",
            &mut self.ratio.interim_break,
        )?;
        Self::apply_env_var("PACECLOCK_RATIO_LONG_CLAMP", &mut self.ratio.long_clamp)?;
        Self::apply_env_var(
            "PACECLOCK_RATIO_FALLBACK_BASELINE_METERS",
            &mut self.ratio.fallback_baseline_meters,
        )?;

        // Send-off rounding
        Self::apply_env_var(
            "PACECLOCK_SEND_OFF_STEP_SECONDS",
            &mut self.send_off.step_seconds,
        )?;
        Self::apply_env_var(
            "PACECLOCK_SEND_OFF_ROUND_UP_THRESHOLD",
            &mut self.send_off.round_up_threshold,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(PacingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_percent() {
        let mut config = PacingConfig::default();
        config.rest_curves.threshold.long = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_rejects_misordered_breakpoints() {
        let mut config = PacingConfig::default();
        config.ratio.interim_break = 20.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_rejects_zero_step() {
        let mut config = PacingConfig::default();
        config.send_off.step_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_deserialization_fills_defaults_and_validates() {
        let config: PacingConfig =
            serde_json::from_str(r#"{"send_off": {"step_seconds": 10, "round_up_threshold": 5}}"#)
                .unwrap();
        assert_eq!(config.rest_curves, RestCurvesConfig::default());
        assert_eq!(config.send_off.step_seconds, 10);

        let err = serde_json::from_str::<PacingConfig>(
            r#"{"send_off": {"step_seconds": 0, "round_up_threshold": 3}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("step_seconds"), "got: {err}");
    }

    #[test]
    fn test_rejects_threshold_past_step() {
        let mut config = PacingConfig::default();
        config.send_off.round_up_threshold = 6;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}
