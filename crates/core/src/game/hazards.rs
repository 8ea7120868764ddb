//! Greedy axis-chase pursuit and the move/skip cadence of hazards.

use tracing::{trace, warn};

use super::*;

/// Horizontal first: a hazard only moves along y once it shares the target's column.
/// Returns `None` when both cells coincide.
pub fn chase_direction(from: Pos, target: Pos) -> Option<Direction> {
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    match (dx.signum(), dy.signum()) {
        (1, _) => Some(Direction::Right),
        (-1, _) => Some(Direction::Left),
        (_, 1) => Some(Direction::Up),
        (_, -1) => Some(Direction::Down),
        _ => None,
    }
}

impl Game {
    /// Gives `hazard` its action for this sweep and returns the pause to observe afterwards.
    pub(super) fn step_hazard(&mut self, hazard: EntityId) -> f32 {
        let Some(entity) = self.state.entities.get_mut(hazard) else {
            return 0.0;
        };
        let pause = entity.move_duration;
        let from = entity.pos;
        let EntityState::Hazard { skip_move, .. } = &mut entity.state else {
            return 0.0;
        };
        if *skip_move {
            *skip_move = false;
            trace!(?from, "hazard skips this turn");
            self.log.push(GameEvent::HazardActed { entity: hazard, action: HazardAction::Skipped });
            return pause;
        }

        let target = self.state.controlled_pos();
        let Some(direction) = chase_direction(from, target) else {
            return pause;
        };
        let action =
            match self.attempt_move(hazard, direction.delta(), Capability::Controlled) {
                Ok(outcome) => HazardAction::Attempted(outcome),
                Err(error) => {
                    warn!(%error, ?from, "hazard step rejected");
                    return pause;
                }
            };
        if let Some(EntityState::Hazard { skip_move, .. }) =
            self.state.entities.get_mut(hazard).map(|entity| &mut entity.state)
        {
            *skip_move = true;
        }
        trace!(?from, ?direction, ?action, "hazard acted");
        self.log.push(GameEvent::HazardActed { entity: hazard, action });

        if self.state.resource() <= 0 {
            self.game_over();
        }
        pause
    }
}
