//! Procedural level generation: the free-cell pool, the layout pass and seed derivation.

pub mod model;

mod layout;
mod pool;
mod seed;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::LevelConfig;
use crate::error::GameError;

pub use layout::{LevelLayoutGenerator, SPAWN_CELL, exit_cell};
pub use model::{DrawnCounts, GeneratedLevel, PlacedObject, Placement};
pub use pool::GridPositionPool;
pub use seed::derive_level_seed;

/// Builds the layout for `config.level_number` from the run seed alone.
pub fn generate_level(run_seed: u64, config: &LevelConfig) -> Result<GeneratedLevel, GameError> {
    let mut rng = level_rng(run_seed, config.level_number);
    LevelLayoutGenerator::new().generate(config, &mut rng)
}

pub(crate) fn level_rng(run_seed: u64, level_number: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_level_seed(run_seed, level_number))
}
