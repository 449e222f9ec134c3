// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shared helpers for paceclock-cli argument parsing and output
// ABOUTME: Provides the unit argument and display formatting utilities

pub mod display;

use clap::ValueEnum;
use paceclock::units::DisplayUnit;

/// Distance unit accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    /// Meters
    #[value(alias = "meters")]
    M,
    /// Yards
    #[value(alias = "yards")]
    Yd,
}

impl From<UnitArg> for DisplayUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::M => Self::Meters,
            UnitArg::Yd => Self::Yards,
        }
    }
}
