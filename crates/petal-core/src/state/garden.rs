//! The tiny garden: three plants that grow one stage per finished session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Plant kinds, in the order sessions feed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantKind {
    Rose,
    Hydrangea,
    Sunflower,
}

impl PlantKind {
    /// Growth order. A session advances the first plant in this list that
    /// has not bloomed yet.
    pub const ALL: [PlantKind; 3] = [PlantKind::Rose, PlantKind::Hydrangea, PlantKind::Sunflower];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantKind::Rose => "rose",
            PlantKind::Hydrangea => "hydrangea",
            PlantKind::Sunflower => "sunflower",
        }
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Growth stage of a single plant. Persisted as 0, 1 or 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GrowthStage {
    #[default]
    Seed,
    Grow,
    Bloom,
}

impl GrowthStage {
    /// The stage after this one, or `None` once bloomed.
    pub fn next(self) -> Option<GrowthStage> {
        match self {
            GrowthStage::Seed => Some(GrowthStage::Grow),
            GrowthStage::Grow => Some(GrowthStage::Bloom),
            GrowthStage::Bloom => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Seed => "seed",
            GrowthStage::Grow => "grow",
            GrowthStage::Bloom => "bloom",
        }
    }
}

impl From<GrowthStage> for u8 {
    fn from(stage: GrowthStage) -> u8 {
        match stage {
            GrowthStage::Seed => 0,
            GrowthStage::Grow => 1,
            GrowthStage::Bloom => 2,
        }
    }
}

impl TryFrom<u8> for GrowthStage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GrowthStage::Seed),
            1 => Ok(GrowthStage::Grow),
            2 => Ok(GrowthStage::Bloom),
            other => Err(ValidationError::StageOutOfRange(other)),
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-plant growth, serialized as `{"rose": 0, "hydrangea": 0, "sunflower": 0}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garden {
    #[serde(default)]
    pub rose: GrowthStage,
    #[serde(default)]
    pub hydrangea: GrowthStage,
    #[serde(default)]
    pub sunflower: GrowthStage,
}

impl Garden {
    /// Highest possible sum of stages across all plants.
    pub const MAX_GROWTH: u32 = 6;

    pub fn get(&self, kind: PlantKind) -> GrowthStage {
        match kind {
            PlantKind::Rose => self.rose,
            PlantKind::Hydrangea => self.hydrangea,
            PlantKind::Sunflower => self.sunflower,
        }
    }

    fn get_mut(&mut self, kind: PlantKind) -> &mut GrowthStage {
        match kind {
            PlantKind::Rose => &mut self.rose,
            PlantKind::Hydrangea => &mut self.hydrangea,
            PlantKind::Sunflower => &mut self.sunflower,
        }
    }

    /// Grow the first plant that has not bloomed by one stage.
    ///
    /// Returns the plant and its new stage, or `None` when the whole garden
    /// is already in bloom.
    pub fn advance(&mut self) -> Option<(PlantKind, GrowthStage)> {
        for kind in PlantKind::ALL {
            let stage = self.get_mut(kind);
            if let Some(next) = stage.next() {
                *stage = next;
                return Some((kind, next));
            }
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlantKind, GrowthStage)> + '_ {
        PlantKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Sum of all stages, 0..=6.
    pub fn total_growth(&self) -> u32 {
        self.iter().map(|(_, stage)| u8::from(stage) as u32).sum()
    }

    pub fn is_full_bloom(&self) -> bool {
        self.iter().all(|(_, stage)| stage == GrowthStage::Bloom)
    }
}
