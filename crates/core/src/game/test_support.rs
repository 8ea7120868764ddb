//! Shared fixtures for the `game` test suites: an empty bordered level plus helpers that
//! place entities by hand and drive the scheduler to its next input point.

use super::*;
use crate::config::CountRange;
use crate::content::{OBSTACLE_HIT_POINTS, hazard_stats};

pub(super) const STEP: f32 = 0.05;

/// 10x10 grid, nothing scattered, level 1 (so no hazards). Exit at (8, 8), spawn at (1, 1).
pub(super) fn empty_config() -> GameConfig {
    GameConfig {
        columns: 10,
        rows: 10,
        obstacle_count: CountRange::exact(0),
        collectible_count: CountRange::exact(0),
        ..GameConfig::default()
    }
}

pub(super) fn empty_level(resource: i32) -> Game {
    Game::new(7, &empty_config(), RunCarryover { level: 1, resource }).expect("empty level fits")
}

pub(super) fn ready_level(resource: i32) -> Game {
    let mut game = empty_level(resource);
    finish_setup(&mut game);
    game
}

pub(super) fn place_controlled(game: &mut Game, pos: Pos) {
    let controlled = game.state.controlled;
    game.state.entities[controlled].pos = pos;
}

pub(super) fn add_hazard(game: &mut Game, pos: Pos, kind: HazardKind) -> EntityId {
    let damage = hazard_stats(kind).damage;
    let id = game.state.spawn(
        pos,
        game.config.move_duration,
        EntityState::Hazard { kind, damage, skip_move: false },
    );
    game.state.hazards.register(id);
    id
}

pub(super) fn add_obstacle(game: &mut Game, pos: Pos) -> EntityId {
    game.state.spawn(
        pos,
        game.config.move_duration,
        EntityState::Obstacle { variant: 0, hp: OBSTACLE_HIT_POINTS },
    )
}

pub(super) fn add_collectible(game: &mut Game, pos: Pos, kind: CollectibleKind) -> EntityId {
    game.state.spawn(pos, game.config.move_duration, EntityState::Collectible { kind })
}

pub(super) fn finish_setup(game: &mut Game) {
    game.tick(game.config.level_start_delay);
    assert_eq!(game.turn_state(), TurnState::ControlledTurn);
}

/// Ticks until the controlled entity may act again or the level has ended.
pub(super) fn settle(game: &mut Game) {
    for _ in 0..2_000 {
        if game.accepts_input()
            || matches!(game.turn_state(), TurnState::LevelComplete | TurnState::GameOver)
        {
            return;
        }
        game.tick(STEP);
    }
    panic!("scheduler never returned to an input point");
}

pub(super) fn play_turn(game: &mut Game, direction: Direction) -> MoveOutcome {
    let outcome = game
        .submit_input(InputSignal::from_direction(direction))
        .expect("input accepted")
        .expect("non-idle input");
    settle(game);
    outcome
}

pub(super) fn hazard_actions(events: &[GameEvent]) -> Vec<(EntityId, HazardAction)> {
    events
        .iter()
        .filter_map(|event| match *event {
            GameEvent::HazardActed { entity, action } => Some((entity, action)),
            _ => None,
        })
        .collect()
}

pub(super) fn hp_of(game: &Game, id: EntityId) -> Option<i32> {
    match game.state.entities.get(id)?.state {
        EntityState::Obstacle { hp, .. } => Some(hp),
        _ => None,
    }
}
