// ABOUTME: Stroke and skill categories with canonical labels and parse aliases
// ABOUTME: Parsing is case-insensitive and resolves shorthand like "fly" or "im"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Stroke or skill a set is swum with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeType {
    /// Freestyle / front crawl
    Freestyle,
    /// Backstroke
    Backstroke,
    /// Breaststroke
    Breaststroke,
    /// Butterfly
    Butterfly,
    /// Individual medley
    IndividualMedley,
    /// Kick sets
    Kick,
    /// Technique drills
    Drill,
}

/// Lower-case aliases accepted by [`StrokeType::from_str`], canonical label first
const ALIASES: [(StrokeType, &[&str]); 7] = [
    (
        StrokeType::Freestyle,
        &["freestyle", "free", "fr", "fs", "free style", "crawl"],
    ),
    (StrokeType::Backstroke, &["backstroke", "back", "bk", "ba"]),
    (StrokeType::Breaststroke, &["breaststroke", "breast", "br"]),
    (StrokeType::Butterfly, &["butterfly", "fly", "bf"]),
    (
        StrokeType::IndividualMedley,
        &["im", "medley", "individual medley"],
    ),
    (StrokeType::Kick, &["kick", "k"]),
    (StrokeType::Drill, &["drill", "dr", "technique"]),
];

impl StrokeType {
    /// Every stroke, in declaration order
    pub const ALL: [Self; 7] = [
        Self::Freestyle,
        Self::Backstroke,
        Self::Breaststroke,
        Self::Butterfly,
        Self::IndividualMedley,
        Self::Kick,
        Self::Drill,
    ];

    /// Canonical label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Freestyle => "Freestyle",
            Self::Backstroke => "Backstroke",
            Self::Breaststroke => "Breaststroke",
            Self::Butterfly => "Butterfly",
            Self::IndividualMedley => "IM",
            Self::Kick => "Kick",
            Self::Drill => "Drill",
        }
    }

    /// Accepted parse aliases (lower case)
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        for (stroke, aliases) in ALIASES {
            if stroke == self {
                return aliases;
            }
        }
        &[]
    }
}

impl fmt::Display for StrokeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StrokeType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&key.as_str()))
            .map(|(stroke, _)| *stroke)
            .ok_or_else(|| AppError::invalid_format(format!("unknown stroke '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_parses_back() {
        for stroke in StrokeType::ALL {
            assert_eq!(stroke.label().parse::<StrokeType>().unwrap(), stroke);
            assert!(!stroke.aliases().is_empty());
        }
    }

    #[test]
    fn test_aliases_are_case_insensitive() {
        assert_eq!("FLY".parse::<StrokeType>().unwrap(), StrokeType::Butterfly);
        assert_eq!("  Free   Style ".parse::<StrokeType>().unwrap(), StrokeType::Freestyle);
        assert_eq!("Individual Medley".parse::<StrokeType>().unwrap(), StrokeType::IndividualMedley);
        assert!("sidestroke".parse::<StrokeType>().is_err());
    }
}
