use std::mem;

use tracing::debug;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::mapgen::DrawnCounts;
use crate::movement::{Motion, resolve_move};
use crate::run::RunCarryover;
use crate::state::{EntityState, GameState};
use crate::types::*;

mod bootstrap;
mod hash;
mod hazards;
mod triggers;
mod turns;

#[cfg(test)]
mod test_support;

pub use hazards::chase_direction;

/// Progress through one hazard phase: the pause still to elapse and the next registry slot.
#[derive(Clone, Copy, Debug, PartialEq)]
struct HazardSweep {
    pause: f32,
    cursor: usize,
}

/// One level of play: the layout, its entities and the turn scheduler that drives them.
pub struct Game {
    seed: u64,
    config: GameConfig,
    state: GameState,
    counts: DrawnCounts,
    turn: TurnState,
    setup_remaining: f32,
    restart_remaining: f32,
    sweep: Option<HazardSweep>,
    motion: Option<Motion>,
    turns_taken: u64,
    log: Vec<GameEvent>,
}

impl Game {
    /// Runs one step for `mover` through the movement resolver.
    ///
    /// Only the controlled entity may move during `ControlledTurn` and only hazards during
    /// `HazardPhase`; anything else, or a call while another motion is still interpolating,
    /// is a `StateViolation` and changes nothing. Outside the crate the controlled entity moves
    /// through `submit_input` and hazards through the sweep, so the step cost and skip flags
    /// always apply.
    pub(crate) fn attempt_move(
        &mut self,
        mover: EntityId,
        delta: Delta,
        expected: Capability,
    ) -> Result<MoveOutcome, GameError> {
        let capability =
            self.state.entities.get(mover).ok_or(GameError::UnknownEntity)?.capability();
        let allowed = matches!(
            (self.turn, capability),
            (TurnState::ControlledTurn, Capability::Controlled)
                | (TurnState::HazardPhase, Capability::Hazard)
        );
        if !allowed || self.motion.is_some() {
            return Err(GameError::StateViolation { state: self.turn });
        }

        let resolution = resolve_move(&mut self.state, mover, delta, expected, &mut self.log)?;
        self.motion = resolution.motion;
        Ok(resolution.outcome)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn level_number(&self) -> u32 {
        self.state.level_number
    }

    pub fn resource(&self) -> i32 {
        self.state.resource()
    }

    pub fn drawn_counts(&self) -> DrawnCounts {
        self.counts
    }

    pub fn turns_taken(&self) -> u64 {
        self.turns_taken
    }

    pub fn accepts_input(&self) -> bool {
        self.turn == TurnState::ControlledTurn && self.motion.is_none()
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    /// Where `entity` should be drawn this frame, mid-motion positions included.
    pub fn render_position(&self, entity: EntityId) -> Option<(f32, f32)> {
        if let Some(motion) = self.motion.filter(|motion| motion.entity == entity) {
            return Some(motion.current());
        }
        self.state.entities.get(entity).map(|entity| entity.pos.as_f32())
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.log
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.log)
    }

    /// The record handed to the next level: current level number and remaining resource.
    pub fn carryover(&self) -> RunCarryover {
        RunCarryover { level: self.state.level_number, resource: self.state.resource() }
    }

    /// True once the exit was reached and the restart delay has fully elapsed.
    pub fn restart_ready(&self) -> bool {
        self.turn == TurnState::LevelComplete && self.restart_remaining <= 0.0
    }

    pub fn final_level(&self) -> Option<u32> {
        (self.turn == TurnState::GameOver).then_some(self.state.level_number)
    }

    fn set_turn(&mut self, to: TurnState) {
        let from = self.turn;
        if from == to {
            return;
        }
        debug!(?from, ?to, level = self.state.level_number, "turn state changed");
        self.turn = to;
        self.log.push(GameEvent::TurnChanged { from, to });
    }

    fn change_resource(&mut self, delta: i32, reason: ResourceReason) {
        let controlled = self.state.controlled;
        let Some(entity) = self.state.entities.get_mut(controlled) else {
            return;
        };
        if let EntityState::Controlled { resource, .. } = &mut entity.state {
            *resource += delta;
            self.log.push(GameEvent::ResourceChanged { value: *resource, delta, reason });
        }
    }
}
