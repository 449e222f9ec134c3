// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for paceclock-cli
// ABOUTME: Provides the set pacing and course snap commands

pub mod set;
pub mod snap;
