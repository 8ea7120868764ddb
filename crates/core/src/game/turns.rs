//! The tick-driven turn machine: setup delay, controlled input, the paced hazard sweep and
//! the post-exit restart countdown.

use super::*;

impl Game {
    /// Advances timers and any in-flight motion by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }
        self.advance_motion(dt);
        match self.turn {
            TurnState::Setup => {
                self.setup_remaining -= dt;
                if self.setup_remaining <= 0.0 {
                    self.set_turn(TurnState::ControlledTurn);
                }
            }
            TurnState::HazardPhase => self.advance_sweep(dt),
            TurnState::LevelComplete => self.restart_remaining -= dt,
            TurnState::ControlledTurn | TurnState::GameOver => {}
        }
    }

    /// Consumes one normalized input for the controlled entity.
    ///
    /// An idle signal is "no input this poll" and returns `Ok(None)`. Otherwise the resource
    /// drops by one before the move resolves, and the turn passes to the hazards (or ends the
    /// game when the resource is spent).
    pub fn submit_input(&mut self, signal: InputSignal) -> Result<Option<MoveOutcome>, GameError> {
        if !self.accepts_input() {
            return Err(GameError::StateViolation { state: self.turn });
        }
        let Some(direction) = signal.resolve() else {
            return Ok(None);
        };

        self.turns_taken += 1;
        self.change_resource(-1, ResourceReason::Step);
        let controlled = self.state.controlled;
        let outcome = self.attempt_move(controlled, direction.delta(), Capability::Obstacle)?;
        if outcome.moved() {
            self.log.push(GameEvent::Cue(AudioCue::Move));
        }

        if self.state.resource() <= 0 {
            self.game_over();
        } else {
            self.begin_sweep();
        }
        Ok(Some(outcome))
    }

    fn begin_sweep(&mut self) {
        let mut pause = self.config.turn_delay;
        if self.state.hazards.is_empty() {
            pause += self.config.turn_delay;
        }
        self.sweep = Some(HazardSweep { pause, cursor: 0 });
        self.set_turn(TurnState::HazardPhase);
    }

    fn advance_sweep(&mut self, dt: f32) {
        let Some(mut sweep) = self.sweep else {
            self.set_turn(TurnState::ControlledTurn);
            return;
        };
        sweep.pause -= dt;
        while sweep.pause <= 0.0 && self.motion.is_none() && self.turn == TurnState::HazardPhase {
            let Some(hazard) = self.state.hazards.get(sweep.cursor) else {
                self.sweep = None;
                self.set_turn(TurnState::ControlledTurn);
                return;
            };
            sweep.cursor += 1;
            sweep.pause += self.step_hazard(hazard);
        }
        self.sweep = (self.turn == TurnState::HazardPhase).then_some(sweep);
    }

    fn advance_motion(&mut self, dt: f32) {
        let Some(motion) = self.motion.as_mut() else {
            return;
        };
        if !motion.advance(dt) {
            return;
        }
        let Motion { entity, to, .. } = *motion;
        self.motion = None;
        if let Some(mover) = self.state.entities.get_mut(entity) {
            mover.pos = to;
        }
        self.log.push(GameEvent::MotionFinished { entity, pos: to });
        if entity == self.state.controlled && self.turn != TurnState::GameOver {
            self.resolve_triggers(to);
        }
    }
}
