//! Bordered board construction and category-by-category scattering onto the shared pool.

use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::{CountRange, LevelConfig};
use crate::content::{BOUNDARY_VARIANTS, COLLECTIBLES, FLOOR_VARIANTS, HAZARDS, OBSTACLE_VARIANTS};
use crate::error::GameError;
use crate::state::{Board, Tile};
use crate::types::Pos;

use super::model::{DrawnCounts, GeneratedLevel, PlacedObject, Placement};
use super::pool::GridPositionPool;
use super::seed::{random_count, random_index, random_variant};

/// Where the controlled entity enters every level.
pub const SPAWN_CELL: Pos = Pos { y: 1, x: 1 };

pub fn exit_cell(columns: i32, rows: i32) -> Pos {
    Pos { y: rows - 2, x: columns - 2 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scatter {
    Obstacles,
    Collectibles,
    Hazards,
}

#[derive(Debug, Default)]
pub struct LevelLayoutGenerator {
    pool: GridPositionPool,
}

impl LevelLayoutGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(
        &mut self,
        config: &LevelConfig,
        rng: &mut ChaCha8Rng,
    ) -> Result<GeneratedLevel, GameError> {
        let board = build_board(config.columns, config.rows, rng);

        self.pool.reset(config.columns, config.rows);
        let spawn = SPAWN_CELL;
        let exit = exit_cell(config.columns, config.rows);
        self.pool.reserve(spawn);
        self.pool.reserve(exit);

        let mut placements = Vec::new();
        let counts = DrawnCounts {
            obstacles: self.scatter(
                Scatter::Obstacles,
                config.obstacle_count,
                rng,
                &mut placements,
            )?,
            collectibles: self.scatter(
                Scatter::Collectibles,
                config.collectible_count,
                rng,
                &mut placements,
            )?,
            hazards: self.scatter(Scatter::Hazards, config.hazard_count(), rng, &mut placements)?,
        };
        debug!(
            level = config.level_number,
            obstacles = counts.obstacles,
            collectibles = counts.collectibles,
            hazards = counts.hazards,
            free_cells = self.pool.len(),
            "level layout generated"
        );

        Ok(GeneratedLevel { config: *config, board, spawn, exit, placements, counts })
    }

    fn scatter(
        &mut self,
        scatter: Scatter,
        range: CountRange,
        rng: &mut ChaCha8Rng,
        placements: &mut Vec<Placement>,
    ) -> Result<u32, GameError> {
        let count = random_count(rng, range);
        for _ in 0..count {
            let pos = self.pool.take(rng)?;
            let object = match scatter {
                Scatter::Obstacles => {
                    PlacedObject::Obstacle { variant: random_variant(rng, OBSTACLE_VARIANTS) }
                }
                Scatter::Collectibles => {
                    PlacedObject::Collectible(COLLECTIBLES[random_index(rng, COLLECTIBLES.len())])
                }
                Scatter::Hazards => PlacedObject::Hazard(HAZARDS[random_index(rng, HAZARDS.len())]),
            };
            trace!(?pos, ?object, "placed");
            placements.push(Placement { pos, object });
        }
        Ok(count)
    }
}

fn build_board(columns: i32, rows: i32, rng: &mut ChaCha8Rng) -> Board {
    let mut board = Board::new(columns, rows);
    for y in -1..=rows {
        for x in -1..=columns {
            let pos = Pos { y, x };
            let tile = if board.is_border(pos) {
                Tile::Boundary { variant: random_variant(rng, BOUNDARY_VARIANTS) }
            } else {
                Tile::Floor { variant: random_variant(rng, FLOOR_VARIANTS) }
            };
            board.set_tile(pos, tile);
        }
    }
    board
}
