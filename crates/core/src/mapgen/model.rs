//! Public data models for generated levels and their scattered objects.

use crate::config::LevelConfig;
use crate::content::{collectible_variant, hazard_variant};
use crate::state::{Board, Tile};
use crate::types::{Category, CollectibleKind, HazardKind, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacedObject {
    Obstacle { variant: u8 },
    Collectible(CollectibleKind),
    Hazard(HazardKind),
}

impl PlacedObject {
    pub fn category(&self) -> Category {
        match self {
            PlacedObject::Obstacle { .. } => Category::Obstacle,
            PlacedObject::Collectible(_) => Category::Collectible,
            PlacedObject::Hazard(_) => Category::Hazard,
        }
    }

    pub fn variant(&self) -> u8 {
        match *self {
            PlacedObject::Obstacle { variant } => variant,
            PlacedObject::Collectible(kind) => collectible_variant(kind),
            PlacedObject::Hazard(kind) => hazard_variant(kind),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub object: PlacedObject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawnCounts {
    pub obstacles: u32,
    pub collectibles: u32,
    pub hazards: u32,
}

impl DrawnCounts {
    pub fn total(&self) -> u32 {
        self.obstacles + self.collectibles + self.hazards
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub config: LevelConfig,
    pub board: Board,
    pub spawn: Pos,
    pub exit: Pos,
    /// Scattered objects in draw order: obstacles, then collectibles, then hazards.
    pub placements: Vec<Placement>,
    pub counts: DrawnCounts,
}

impl GeneratedLevel {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.config.level_number.to_le_bytes());
        bytes.extend(self.board.columns.to_le_bytes());
        bytes.extend(self.board.rows.to_le_bytes());
        for tile in &self.board.tiles {
            let (tag, variant) = match *tile {
                Tile::Floor { variant } => (0_u8, variant),
                Tile::Boundary { variant } => (1_u8, variant),
            };
            bytes.push(tag);
            bytes.push(variant);
        }
        for pos in [self.spawn, self.exit] {
            bytes.extend(pos.y.to_le_bytes());
            bytes.extend(pos.x.to_le_bytes());
        }
        bytes.extend((self.placements.len() as u32).to_le_bytes());
        for placement in &self.placements {
            bytes.push(placement.object.category() as u8);
            bytes.push(placement.object.variant());
            bytes.extend(placement.pos.y.to_le_bytes());
            bytes.extend(placement.pos.x.to_le_bytes());
        }
        bytes
    }

    pub fn placements_of(&self, category: Category) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |placement| placement.object.category() == category)
    }
}
