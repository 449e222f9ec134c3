// ABOUTME: Exact distance value stored as integer micro-units (1/10,000 m)
// ABOUTME: Unit-agnostic equality, checked arithmetic, display formatting, and pool snap-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::units::{MICRO_UNITS_PER_METER, MICRO_UNITS_PER_YARD};
use crate::errors::{AppError, AppResult};
use crate::models::Course;

/// Unit a distance prefers to be shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayUnit {
    /// Meters
    #[default]
    Meters,
    /// Yards
    Yards,
}

impl DisplayUnit {
    /// Short suffix used when formatting
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Yards => "yd",
        }
    }
}

/// An exact length.
///
/// Stored as a whole number of micro-units (0.1 mm). One yard is exactly 9,144
/// micro-units, so yard and meter distances mix without drift. The display unit is
/// a formatting hint only: it takes no part in equality, ordering, hashing or
/// arithmetic.
///
/// # Examples
///
/// ```rust
/// use paceclock_core::units::Distance;
///
/// let fifty_yards = Distance::from_whole_yards(50)?;
/// assert_eq!(fifty_yards.units(), 457_200);
/// assert_eq!(fifty_yards.to_string(), "50 yd");
/// # Ok::<(), paceclock_core::errors::AppError>(())
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Distance {
    units: i64,
    #[serde(default)]
    display_unit: DisplayUnit,
}

impl Distance {
    /// Zero length, shown in meters
    pub const ZERO: Self = Self::from_units(0);

    /// Wrap raw micro-units, shown in meters
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self {
            units,
            display_unit: DisplayUnit::Meters,
        }
    }

    /// Wrap raw micro-units with an explicit display unit
    #[must_use]
    pub const fn from_units_in(units: i64, display_unit: DisplayUnit) -> Self {
        Self {
            units,
            display_unit,
        }
    }

    /// Distance from fractional meters, rounded to the nearest micro-unit
    ///
    /// # Errors
    ///
    /// `InvalidInput` for non-finite values, `ArithmeticOverflow` when the value
    /// does not fit in the canonical range.
    pub fn from_meters(meters: f64) -> AppResult<Self> {
        let units = scaled_units(meters, MICRO_UNITS_PER_METER, "meters")?;
        Ok(Self::from_units_in(units, DisplayUnit::Meters))
    }

    /// Distance from fractional yards, rounded to the nearest micro-unit
    ///
    /// # Errors
    ///
    /// `InvalidInput` for non-finite values, `ArithmeticOverflow` when the value
    /// does not fit in the canonical range.
    pub fn from_yards(yards: f64) -> AppResult<Self> {
        let units = scaled_units(yards, MICRO_UNITS_PER_YARD, "yards")?;
        Ok(Self::from_units_in(units, DisplayUnit::Yards))
    }

    /// Exact distance from whole meters
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the value does not fit.
    pub fn from_whole_meters(meters: i64) -> AppResult<Self> {
        meters
            .checked_mul(MICRO_UNITS_PER_METER)
            .map(|units| Self::from_units_in(units, DisplayUnit::Meters))
            .ok_or_else(|| AppError::overflow("meters to micro-units"))
    }

    /// Exact distance from whole yards
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the value does not fit.
    pub fn from_whole_yards(yards: i64) -> AppResult<Self> {
        yards
            .checked_mul(MICRO_UNITS_PER_YARD)
            .map(|units| Self::from_units_in(units, DisplayUnit::Yards))
            .ok_or_else(|| AppError::overflow("yards to micro-units"))
    }

    /// Build from a value expressed in `unit`
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_meters`] / [`Self::from_yards`].
    pub fn from_value(value: f64, unit: DisplayUnit) -> AppResult<Self> {
        match unit {
            DisplayUnit::Meters => Self::from_meters(value),
            DisplayUnit::Yards => Self::from_yards(value),
        }
    }

    /// Canonical micro-units
    #[must_use]
    pub const fn units(self) -> i64 {
        self.units
    }

    /// Preferred display unit
    #[must_use]
    pub const fn display_unit(self) -> DisplayUnit {
        self.display_unit
    }

    /// Same length, different display unit
    #[must_use]
    pub const fn re_tagged(self, display_unit: DisplayUnit) -> Self {
        Self::from_units_in(self.units, display_unit)
    }

    /// Length in meters (lossy)
    #[must_use]
    pub fn to_meters(self) -> f64 {
        self.units as f64 / MICRO_UNITS_PER_METER as f64
    }

    /// Length in yards (lossy)
    #[must_use]
    pub fn to_yards(self) -> f64 {
        self.units as f64 / MICRO_UNITS_PER_YARD as f64
    }

    /// Length in the preferred display unit (lossy)
    #[must_use]
    pub fn in_display_unit(self) -> f64 {
        match self.display_unit {
            DisplayUnit::Meters => self.to_meters(),
            DisplayUnit::Yards => self.to_yards(),
        }
    }

    /// Strictly greater than zero
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.units > 0
    }

    /// Sum; keeps this value's display unit
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the sum does not fit.
    pub fn checked_add(self, other: Self) -> AppResult<Self> {
        self.units
            .checked_add(other.units)
            .map(|units| self.with_units(units))
            .ok_or_else(|| AppError::overflow("distance addition"))
    }

    /// Difference; keeps this value's display unit
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the difference does not fit.
    pub fn checked_sub(self, other: Self) -> AppResult<Self> {
        self.units
            .checked_sub(other.units)
            .map(|units| self.with_units(units))
            .ok_or_else(|| AppError::overflow("distance subtraction"))
    }

    /// Scale by an integer factor
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the product does not fit.
    pub fn checked_mul(self, factor: i64) -> AppResult<Self> {
        self.units
            .checked_mul(factor)
            .map(|units| self.with_units(units))
            .ok_or_else(|| AppError::overflow("distance multiplication"))
    }

    /// Scale by a float factor, rounding to the nearest micro-unit
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a non-finite factor, `ArithmeticOverflow` if the product
    /// does not fit.
    pub fn checked_mul_f64(self, factor: f64) -> AppResult<Self> {
        if !factor.is_finite() {
            return Err(AppError::invalid_input(format!(
                "distance scale factor must be finite, got {factor}"
            )));
        }
        let scaled = (self.units as f64 * factor).round();
        to_i64(scaled, "distance scaling").map(|units| self.with_units(units))
    }

    /// Round up to a whole, positive number of `pool` lengths.
    ///
    /// The result is never below one pool length, is at least `self`, and keeps
    /// this value's display unit. Snapping an already snapped value is a no-op.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `pool` is not positive, `ArithmeticOverflow` if the
    /// rounded value does not fit.
    pub fn snap_up_to_multiple(self, pool: Self) -> AppResult<Self> {
        let p = pool.units;
        if p <= 0 {
            return Err(AppError::invalid_input("pool length must be positive"));
        }
        let d = self.units;
        let multiples = if d <= 0 {
            1
        } else {
            d / p + i64::from(d % p != 0)
        };
        multiples
            .checked_mul(p)
            .map(|units| self.with_units(units))
            .ok_or_else(|| AppError::overflow("pool length snap-up"))
    }

    /// Round up to a whole number of pool lengths of `course`
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the rounded value does not fit.
    pub fn snap_up_to_course_multiple(self, course: Course) -> AppResult<Self> {
        self.snap_up_to_multiple(course.pool_length())
    }

    /// Number shown for this distance: one decimal, trailing `.0` removed
    #[must_use]
    pub fn display_value(self) -> String {
        let rendered = format!("{:.1}", self.in_display_unit());
        let trimmed = rendered.strip_suffix(".0").unwrap_or(&rendered);
        if trimmed == "-0" {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        }
    }

    const fn with_units(self, units: i64) -> Self {
        Self::from_units_in(units, self.display_unit)
    }
}

fn scaled_units(value: f64, per_unit: i64, what: &str) -> AppResult<i64> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{what} must be finite, got {value}"
        )));
    }
    to_i64((value * per_unit as f64).round(), what)
}

fn to_i64(rounded: f64, what: &str) -> AppResult<i64> {
    // i64::MAX is not representable; 2^63 is the first value out of range
    if rounded >= i64::MAX as f64 || rounded < i64::MIN as f64 {
        return Err(AppError::overflow(what));
    }
    Ok(rounded as i64)
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.units == other.units
    }
}

impl Eq for Distance {}

impl Hash for Distance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.units.hash(state);
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.units.cmp(&other.units)
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.display_value(),
            self.display_unit.abbreviation()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_display_unit() {
        let meters = Distance::from_units_in(9_144, DisplayUnit::Meters);
        let yards = Distance::from_whole_yards(1).unwrap();
        assert_eq!(meters, yards);
        assert_ne!(meters.display_unit(), yards.display_unit());
    }

    #[test]
    fn test_from_meters_rounds_to_nearest_unit() {
        let d = Distance::from_meters(0.000_06).unwrap();
        assert_eq!(d.units(), 1);
        let d = Distance::from_meters(45.72).unwrap();
        assert_eq!(d.units(), 457_200);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        assert!(Distance::from_meters(f64::NAN).is_err());
        assert!(Distance::from_yards(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_strips_trailing_zero() {
        assert_eq!(Distance::from_whole_meters(100).unwrap().to_string(), "100 m");
        assert_eq!(Distance::from_meters(12.5).unwrap().to_string(), "12.5 m");
        assert_eq!(Distance::from_meters(12.54).unwrap().display_value(), "12.5");
    }

    #[test]
    fn test_snap_rounds_up_and_keeps_display_unit() {
        let pool = Distance::from_whole_meters(25).unwrap();
        let raw = Distance::from_whole_meters(30).unwrap().re_tagged(DisplayUnit::Yards);
        let snapped = raw.snap_up_to_multiple(pool).unwrap();
        assert_eq!(snapped, Distance::from_whole_meters(50).unwrap());
        assert_eq!(snapped.display_unit(), DisplayUnit::Yards);
    }

    #[test]
    fn test_snap_never_goes_below_one_length() {
        let pool = Distance::from_whole_meters(50).unwrap();
        assert_eq!(Distance::ZERO.snap_up_to_multiple(pool).unwrap(), pool);
        assert_eq!(Distance::from_units(1).snap_up_to_multiple(pool).unwrap(), pool);
    }

    #[test]
    fn test_checked_arithmetic_overflows_loudly() {
        let huge = Distance::from_units(i64::MAX);
        assert!(huge.checked_add(Distance::from_units(1)).is_err());
        assert!(huge.checked_mul(2).is_err());
        assert!(huge.checked_mul_f64(2.0).is_err());
        assert!(Distance::from_units(i64::MIN).checked_sub(Distance::from_units(1)).is_err());
    }
}
