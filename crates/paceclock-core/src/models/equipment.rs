// ABOUTME: Training aids and the combinable equipment set used by swim sets
// ABOUTME: Combined pace adjustment is the product of the selected aids' multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::equipment;
use crate::errors::AppError;

/// A single training aid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Fins
    Fins,
    /// Hand paddles
    Paddles,
    /// Pull buoy
    PullBuoy,
    /// Kickboard
    Kickboard,
    /// Center-mount snorkel
    Snorkel,
    /// Ankle/drag band
    DragBand,
}

impl Equipment {
    /// Every aid
    pub const ALL: [Self; 6] = [
        Self::Fins,
        Self::Paddles,
        Self::PullBuoy,
        Self::Kickboard,
        Self::Snorkel,
        Self::DragBand,
    ];

    /// Pace adjustment (below 1.0 is faster)
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Fins => equipment::FINS,
            Self::Paddles => equipment::PADDLES,
            Self::PullBuoy => equipment::PULL_BUOY,
            Self::Kickboard => equipment::KICKBOARD,
            Self::Snorkel => equipment::SNORKEL,
            Self::DragBand => equipment::DRAG_BAND,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fins => "Fins",
            Self::Paddles => "Paddles",
            Self::PullBuoy => "Pull Buoy",
            Self::Kickboard => "Kickboard",
            Self::Snorkel => "Snorkel",
            Self::DragBand => "Drag Band",
        }
    }

    /// Flag for this aid inside an [`EquipmentSet`]
    #[must_use]
    pub const fn flag(self) -> EquipmentSet {
        match self {
            Self::Fins => EquipmentSet::FINS,
            Self::Paddles => EquipmentSet::PADDLES,
            Self::PullBuoy => EquipmentSet::PULL_BUOY,
            Self::Kickboard => EquipmentSet::KICKBOARD,
            Self::Snorkel => EquipmentSet::SNORKEL,
            Self::DragBand => EquipmentSet::DRAG_BAND,
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Equipment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fins" | "fin" => Ok(Self::Fins),
            "paddles" | "paddle" => Ok(Self::Paddles),
            "pull" | "buoy" | "pull buoy" | "pullbuoy" => Ok(Self::PullBuoy),
            "kickboard" | "board" => Ok(Self::Kickboard),
            "snorkel" => Ok(Self::Snorkel),
            "band" | "drag band" | "ankle band" => Ok(Self::DragBand),
            _ => Err(AppError::invalid_format(format!("unknown equipment '{s}'"))),
        }
    }
}

bitflags! {
    /// Set of training aids used on a swim set
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct EquipmentSet: u8 {
        /// Fins
        const FINS = 1 << 0;
        /// Hand paddles
        const PADDLES = 1 << 1;
        /// Pull buoy
        const PULL_BUOY = 1 << 2;
        /// Kickboard
        const KICKBOARD = 1 << 3;
        /// Center-mount snorkel
        const SNORKEL = 1 << 4;
        /// Ankle/drag band
        const DRAG_BAND = 1 << 5;
    }
}

impl EquipmentSet {
    /// Build a set from any sequence of aids; order and duplicates do not matter
    #[must_use]
    pub fn from_aids<I>(aids: I) -> Self
    where
        I: IntoIterator<Item = Equipment>,
    {
        aids.into_iter()
            .fold(Self::empty(), |set, aid| set | aid.flag())
    }

    /// Whether `aid` is selected
    #[must_use]
    pub const fn has(self, aid: Equipment) -> bool {
        self.contains(aid.flag())
    }

    /// Selected aids in canonical order
    pub fn aids(self) -> impl Iterator<Item = Equipment> {
        Equipment::ALL.into_iter().filter(move |aid| self.has(*aid))
    }

    /// Product of the selected aids' multipliers (1.0 when empty)
    #[must_use]
    pub fn combined_multiplier(self) -> f64 {
        self.aids().map(Equipment::multiplier).product()
    }
}
