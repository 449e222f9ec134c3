// ABOUTME: Exact measurement types shared by models and the pacing engine
// ABOUTME: Re-exports Distance, DisplayUnit, and TimeSpan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integer-backed distance and time values.
//!
//! Both types store a canonical integer (micro-units of 0.1 mm, milliseconds) and
//! only convert to floating point for display or for the pacing formulas.

mod distance;
mod time_span;

pub use distance::{Distance, DisplayUnit};
pub use time_span::TimeSpan;
