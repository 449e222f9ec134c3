// ABOUTME: Unified error handling for pacing computations and entity validation
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors carry a
//! stable [`ErrorCode`] so callers can branch on the failure kind (for example,
//! prompting the user for a missing seed) without parsing messages.
//!
//! None of these conditions are retriable: the engine performs no I/O, so the caller
//! has to correct the input before invoking it again.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::StrokeType;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Entity or argument failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Text could not be parsed into the requested value
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Swimmer data (4000-4999)
    /// Swimmer has no seed pace registered for the requested stroke
    #[serde(rename = "MISSING_SEED")]
    MissingSeed = 4000,

    // Arithmetic (7000-7999)
    /// Exact distance/time arithmetic left the representable range
    #[serde(rename = "ARITHMETIC_OVERFLOW")]
    ArithmeticOverflow = 7000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::MissingSeed => "No seed pace is recorded for this stroke",
            Self::ArithmeticOverflow => "The value exceeds the representable range",
        }
    }

    /// Numeric code, stable across releases
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::MissingSeed => "MISSING_SEED",
            Self::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
        };
        f.write_str(name)
    }
}

/// Unified error type for the workspace
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unparsable text
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Swimmer has no seed for `stroke`
    #[must_use]
    pub fn missing_seed(stroke: StrokeType) -> Self {
        Self::new(
            ErrorCode::MissingSeed,
            format!("no seed pace recorded for {}", stroke.label()),
        )
    }

    /// Checked arithmetic failed while performing `operation`
    #[must_use]
    pub fn overflow(operation: &str) -> Self {
        Self::new(
            ErrorCode::ArithmeticOverflow,
            format!("{operation} overflowed"),
        )
    }

    /// Whether this error is a missing-seed condition
    #[must_use]
    pub fn is_missing_seed(&self) -> bool {
        self.code == ErrorCode::MissingSeed
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_description_and_message() {
        let error = AppError::invalid_input("reps must be at least 1");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: reps must be at least 1"
        );
    }

    #[test]
    fn test_missing_seed_names_the_stroke() {
        let error = AppError::missing_seed(StrokeType::Butterfly);
        assert!(error.is_missing_seed());
        assert!(error.message.contains("Butterfly"));
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ErrorCode::InvalidInput.as_u16(), 3000);
        assert_eq!(ErrorCode::MissingSeed.as_u16(), 4000);
        assert_eq!(ErrorCode::ArithmeticOverflow.to_string(), "ARITHMETIC_OVERFLOW");
    }
}
