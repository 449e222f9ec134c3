// ABOUTME: Swimmer identity and per-stroke seed paces
// ABOUTME: Seeds are the only swimmer-specific input to the pacing engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{SeedPace, StrokeType};
use crate::errors::{AppError, AppResult};

/// A swimmer and their demonstrated paces
///
/// # Examples
///
/// ```rust
/// use paceclock_core::models::{SeedPace, StrokeType, Swimmer};
/// use paceclock_core::units::{Distance, TimeSpan};
///
/// let seed = SeedPace::new(Distance::from_whole_yards(100)?, "1:00".parse()?);
/// let swimmer = Swimmer::new("Alex").with_seed(StrokeType::Freestyle, seed);
/// assert!(swimmer.seed(StrokeType::Freestyle).is_some());
/// assert!(swimmer.require_seed(StrokeType::Butterfly).is_err());
/// # Ok::<(), paceclock_core::errors::AppError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimmer {
    id: Uuid,
    name: String,
    #[serde(default)]
    seeds: BTreeMap<StrokeType, SeedPace>,
}

impl Swimmer {
    /// New swimmer with a fresh identifier and no seeds
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Swimmer with a known identifier
    #[must_use]
    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            seeds: BTreeMap::new(),
        }
    }

    /// Identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seed for `stroke`, replacing any previous one
    #[must_use]
    pub fn with_seed(mut self, stroke: StrokeType, seed: SeedPace) -> Self {
        self.seeds.insert(stroke, seed);
        self
    }

    /// Drop the seed for `stroke`
    #[must_use]
    pub fn without_seed(mut self, stroke: StrokeType) -> Self {
        self.seeds.remove(&stroke);
        self
    }

    /// Seed for `stroke`, if recorded
    #[must_use]
    pub fn seed(&self, stroke: StrokeType) -> Option<&SeedPace> {
        self.seeds.get(&stroke)
    }

    /// Seed for `stroke`
    ///
    /// # Errors
    ///
    /// `MissingSeed` when no seed is recorded for the stroke.
    pub fn require_seed(&self, stroke: StrokeType) -> AppResult<&SeedPace> {
        self.seed(stroke)
            .ok_or_else(|| AppError::missing_seed(stroke))
    }

    /// All recorded seeds, ordered by stroke
    pub fn seeds(&self) -> impl Iterator<Item = (StrokeType, &SeedPace)> {
        self.seeds.iter().map(|(stroke, seed)| (*stroke, seed))
    }
}
