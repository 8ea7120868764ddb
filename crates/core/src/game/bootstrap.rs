//! Level construction: layout generation and entity spawning for a fresh `Game`.
//! Nothing here runs once the scheduler has left `Setup`.

use super::*;
use crate::content::{OBSTACLE_HIT_POINTS, hazard_stats};
use crate::mapgen::{GeneratedLevel, LevelLayoutGenerator, PlacedObject, level_rng};
use crate::state::Tile;

impl Game {
    /// Generates level `carry.level` from `seed` and spawns the controlled entity with
    /// `carry.resource`. Fails when the configuration is invalid or asks for more objects
    /// than the interior can hold.
    pub fn new(seed: u64, config: &GameConfig, carry: RunCarryover) -> Result<Self, GameError> {
        config.validate()?;
        let level_config = config.level(carry.level.max(1));
        let mut rng = level_rng(seed, level_config.level_number);
        let level = LevelLayoutGenerator::new().generate(&level_config, &mut rng)?;
        Ok(Self::from_level(seed, config, level, carry.resource))
    }

    fn from_level(seed: u64, config: &GameConfig, level: GeneratedLevel, resource: i32) -> Self {
        let level_number = level.config.level_number;
        let mut log = vec![GameEvent::LevelStarted { level: level_number }];
        for (pos, tile) in level.board.cells() {
            let (category, variant) = match tile {
                Tile::Floor { variant } => (Category::Floor, variant),
                Tile::Boundary { variant } => (Category::Boundary, variant),
            };
            log.push(GameEvent::Placed { category, variant, pos });
        }

        let mut state = GameState::new(level.board, level.exit, level_number);
        for placement in &level.placements {
            let entity_state = match placement.object {
                PlacedObject::Obstacle { variant } => {
                    EntityState::Obstacle { variant, hp: OBSTACLE_HIT_POINTS }
                }
                PlacedObject::Collectible(kind) => EntityState::Collectible { kind },
                PlacedObject::Hazard(kind) => EntityState::Hazard {
                    kind,
                    damage: hazard_stats(kind).damage,
                    skip_move: false,
                },
            };
            let id = state.spawn(placement.pos, config.move_duration, entity_state);
            if let PlacedObject::Hazard(_) = placement.object {
                state.hazards.register(id);
            }
            log.push(GameEvent::Placed {
                category: placement.object.category(),
                variant: placement.object.variant(),
                pos: placement.pos,
            });
        }
        log.push(GameEvent::Placed { category: Category::Exit, variant: 0, pos: level.exit });

        state.spawn_controlled(level.spawn, config.move_duration, resource, config.wall_damage);
        log.push(GameEvent::Placed { category: Category::Controlled, variant: 0, pos: level.spawn });

        debug!(
            seed,
            level = level_number,
            resource,
            hazards = state.hazards.len(),
            "level ready"
        );

        Self {
            seed,
            config: config.clone(),
            state,
            counts: level.counts,
            turn: TurnState::Setup,
            setup_remaining: config.level_start_delay,
            restart_remaining: config.restart_delay,
            sweep: None,
            motion: None,
            turns_taken: 0,
            log,
        }
    }
}
