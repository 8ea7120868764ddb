//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::state::Tile;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u32(self.state.level_number);
        hasher.write_u64(self.turns_taken);
        hasher.write_u8(self.turn as u8);

        for tile in &self.state.board.tiles {
            match *tile {
                Tile::Floor { variant } => hasher.write_u8(variant),
                Tile::Boundary { variant } => hasher.write_u8(0x80 | variant),
            }
        }

        let mut entities: Vec<_> = self.state.entities.values().collect();
        entities.sort_by_key(|entity| (entity.pos, entity.capability()));
        for entity in entities {
            hasher.write_u8(entity.capability() as u8);
            hasher.write_i32(entity.pos.x);
            hasher.write_i32(entity.pos.y);
            match entity.state {
                EntityState::Obstacle { variant, hp } => {
                    hasher.write_u8(variant);
                    hasher.write_i32(hp);
                }
                EntityState::Collectible { kind } => hasher.write_u8(kind as u8),
                EntityState::Hazard { kind, damage, skip_move } => {
                    hasher.write_u8(kind as u8);
                    hasher.write_i32(damage);
                    hasher.write_u8(u8::from(skip_move));
                }
                EntityState::Controlled { resource, impact } => {
                    hasher.write_i32(resource);
                    hasher.write_i32(impact);
                }
            }
        }
        hasher.finish()
    }
}
