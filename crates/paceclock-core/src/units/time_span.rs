// ABOUTME: Exact duration value stored as integer milliseconds
// ABOUTME: Checked arithmetic plus carry-aware m:ss.hh formatting and parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::units::{MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::errors::{AppError, AppResult};

/// An exact duration in whole milliseconds.
///
/// Formats as `m:ss.hh` and parses the same shape (minutes and the fractional part
/// are optional).
///
/// ```rust
/// use paceclock_core::units::TimeSpan;
///
/// let seed: TimeSpan = "1:05.3".parse()?;
/// assert_eq!(seed.as_millis(), 65_300);
/// assert_eq!(seed.to_string(), "1:05.30");
/// # Ok::<(), paceclock_core::errors::AppError>(())
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeSpan {
    millis: i64,
}

impl TimeSpan {
    /// Zero duration
    pub const ZERO: Self = Self::from_millis(0);

    /// Wrap milliseconds
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// From fractional seconds, rounded to the nearest millisecond
    ///
    /// # Errors
    ///
    /// `InvalidInput` for non-finite values, `ArithmeticOverflow` when out of range.
    pub fn from_seconds(seconds: f64) -> AppResult<Self> {
        if !seconds.is_finite() {
            return Err(AppError::invalid_input(format!(
                "seconds must be finite, got {seconds}"
            )));
        }
        let millis = (seconds * MILLIS_PER_SECOND as f64).round();
        if millis >= i64::MAX as f64 || millis < i64::MIN as f64 {
            return Err(AppError::overflow("seconds to milliseconds"));
        }
        Ok(Self::from_millis(millis as i64))
    }

    /// From whole seconds
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` when out of range.
    pub fn from_whole_seconds(seconds: i64) -> AppResult<Self> {
        seconds
            .checked_mul(MILLIS_PER_SECOND)
            .map(Self::from_millis)
            .ok_or_else(|| AppError::overflow("seconds to milliseconds"))
    }

    /// From minute/second/millisecond components
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` when the total does not fit.
    pub fn from_components(minutes: i64, seconds: i64, millis: i64) -> AppResult<Self> {
        minutes
            .checked_mul(MILLIS_PER_MINUTE)
            .and_then(|m| seconds.checked_mul(MILLIS_PER_SECOND).map(|s| (m, s)))
            .and_then(|(m, s)| m.checked_add(s))
            .and_then(|total| total.checked_add(millis))
            .map(Self::from_millis)
            .ok_or_else(|| AppError::overflow("time components"))
    }

    /// Canonical milliseconds
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    /// Fractional seconds (lossy)
    #[must_use]
    pub fn as_seconds(self) -> f64 {
        self.millis as f64 / MILLIS_PER_SECOND as f64
    }

    /// Whole seconds, rounding half away from zero
    #[must_use]
    pub fn as_whole_seconds(self) -> i64 {
        self.as_seconds().round() as i64
    }

    /// Strictly below zero
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.millis < 0
    }

    /// Negative durations become zero
    #[must_use]
    pub const fn clamp_non_negative(self) -> Self {
        if self.millis < 0 {
            Self::ZERO
        } else {
            self
        }
    }

    /// Sum
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the sum does not fit.
    pub fn checked_add(self, other: Self) -> AppResult<Self> {
        self.millis
            .checked_add(other.millis)
            .map(Self::from_millis)
            .ok_or_else(|| AppError::overflow("time addition"))
    }

    /// Difference
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the difference does not fit.
    pub fn checked_sub(self, other: Self) -> AppResult<Self> {
        self.millis
            .checked_sub(other.millis)
            .map(Self::from_millis)
            .ok_or_else(|| AppError::overflow("time subtraction"))
    }

    /// Scale by an integer factor
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the product does not fit.
    pub fn checked_mul(self, factor: i64) -> AppResult<Self> {
        self.millis
            .checked_mul(factor)
            .map(Self::from_millis)
            .ok_or_else(|| AppError::overflow("time multiplication"))
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.millis < 0 { "-" } else { "" };
        let total = self.millis.unsigned_abs();
        let mut minutes = total / MILLIS_PER_MINUTE.unsigned_abs();
        let mut seconds = (total % MILLIS_PER_MINUTE.unsigned_abs()) / 1_000;
        let mut hundredths = (total % 1_000 + 5) / 10;
        if hundredths == 100 {
            seconds += 1;
            hundredths = 0;
        }
        if seconds == 60 {
            minutes += 1;
            seconds = 0;
        }
        write!(f, "{sign}{minutes}:{seconds:02}.{hundredths:02}")
    }
}

impl FromStr for TimeSpan {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = trimmed
            .strip_prefix('-')
            .map_or((false, trimmed), |rest| (true, rest));

        let (minutes_part, seconds_part) = match body.split_once(':') {
            Some((minutes, rest)) => (Some(minutes), rest),
            None => (None, body),
        };
        let (whole_part, fraction_part) = match seconds_part.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (seconds_part, None),
        };

        let invalid = || AppError::invalid_format(format!("expected m:ss.hh, got '{s}'"));

        let minutes = match minutes_part {
            Some(text) => parse_digits(text).ok_or_else(invalid)?,
            None => 0,
        };
        let seconds = parse_digits(whole_part).ok_or_else(invalid)?;
        if minutes_part.is_some() && seconds >= 60 {
            return Err(invalid());
        }
        let millis = match fraction_part {
            Some(text) if (1..=3).contains(&text.len()) => {
                let padded = format!("{text:0<3}");
                parse_digits(&padded).ok_or_else(invalid)?
            }
            Some(_) => return Err(invalid()),
            None => 0,
        };

        let span = Self::from_components(minutes, seconds, millis)?;
        Ok(if negative {
            Self::from_millis(-span.millis)
        } else {
            span
        })
    }
}

fn parse_digits(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_carries_hundredths_into_seconds() {
        assert_eq!(TimeSpan::from_millis(59_996).to_string(), "1:00.00");
        assert_eq!(TimeSpan::from_millis(5_995).to_string(), "0:06.00");
        assert_eq!(TimeSpan::from_millis(46_500).to_string(), "0:46.50");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(TimeSpan::from_millis(-1_500).to_string(), "-0:01.50");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("30".parse::<TimeSpan>().unwrap().as_millis(), 30_000);
        assert_eq!("30.5".parse::<TimeSpan>().unwrap().as_millis(), 30_500);
        assert_eq!("1:00".parse::<TimeSpan>().unwrap().as_millis(), 60_000);
        assert_eq!("2:03.07".parse::<TimeSpan>().unwrap().as_millis(), 123_070);
        assert_eq!("90".parse::<TimeSpan>().unwrap().as_millis(), 90_000);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<TimeSpan>().is_err());
        assert!("1:75".parse::<TimeSpan>().is_err());
        assert!("1:2x".parse::<TimeSpan>().is_err());
        assert!("1:05.1234".parse::<TimeSpan>().is_err());
        assert!(":30".parse::<TimeSpan>().is_err());
    }

    #[test]
    fn test_from_seconds_rounds() {
        assert_eq!(TimeSpan::from_seconds(46.4996).unwrap().as_millis(), 46_500);
        assert!(TimeSpan::from_seconds(f64::NAN).is_err());
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(TimeSpan::from_millis(-10).clamp_non_negative(), TimeSpan::ZERO);
        assert_eq!(TimeSpan::from_millis(10).clamp_non_negative().as_millis(), 10);
    }
}
