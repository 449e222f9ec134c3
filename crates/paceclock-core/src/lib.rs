// ABOUTME: Core types and constants for the paceclock swim pacing engine
// ABOUTME: Foundation crate with error handling, exact units, configuration tables, and workout models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Paceclock Core
//!
//! Foundation crate providing the value types and entities the pacing engine
//! works on. Nothing in here performs I/O or holds global state.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and multiplier tables
//! - **units**: Exact `Distance` (1/10,000 m) and `TimeSpan` (ms) values
//! - **models**: Courses, efforts, equipment, strokes, swimmers and the workout tree

/// Unified error handling with standard error codes
pub mod errors;

/// Unit conversions and multiplier tables organized by domain
pub mod constants;

/// Exact distance and duration values
pub mod units;

/// Configuration tables and workout structure models
pub mod models;
