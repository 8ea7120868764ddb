//! Single-cell movement: obstruction probe, capability-filtered blocked dispatch and the
//! tick-driven interpolation that carries a mover to its destination.

use tracing::trace;

use crate::error::GameError;
use crate::state::{EntityState, GameState};
use crate::types::*;

/// Squared distance under which an interpolating mover snaps onto its destination.
pub const MOTION_EPSILON: f32 = 1e-6;

/// A mover travelling from one cell to an adjacent one. Its committed position does not change
/// until the motion arrives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub entity: EntityId,
    pub from: Pos,
    pub to: Pos,
    current: (f32, f32),
    speed: f32,
}

impl Motion {
    pub fn new(entity: EntityId, from: Pos, to: Pos, duration: f32) -> Self {
        Self { entity, from, to, current: from.as_f32(), speed: 1.0 / duration.max(f32::EPSILON) }
    }

    /// Steps towards the destination; returns `true` once the mover has snapped onto it.
    pub fn advance(&mut self, dt: f32) -> bool {
        let target = self.to.as_f32();
        let remaining_x = target.0 - self.current.0;
        let remaining_y = target.1 - self.current.1;
        let remaining = (remaining_x * remaining_x + remaining_y * remaining_y).sqrt();
        let step = self.speed * dt.max(0.0);
        if step >= remaining {
            self.current = target;
        } else {
            self.current.0 += remaining_x / remaining * step;
            self.current.1 += remaining_y / remaining * step;
        }
        self.remaining_sqr() < MOTION_EPSILON
    }

    pub fn current(&self) -> (f32, f32) {
        self.current
    }

    fn remaining_sqr(&self) -> f32 {
        let target = self.to.as_f32();
        let dx = target.0 - self.current.0;
        let dy = target.1 - self.current.1;
        dx * dx + dy * dy
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MoveResolution {
    pub outcome: MoveOutcome,
    pub motion: Option<Motion>,
}

type BlockedHandler = fn(&mut GameState, EntityId, i32, &mut Vec<GameEvent>);

fn blocked_handler(capability: Capability) -> Option<BlockedHandler> {
    match capability {
        Capability::Obstacle => Some(damage_obstacle),
        Capability::Controlled => Some(drain_resource),
        Capability::Hazard | Capability::Collectible => None,
    }
}

/// Resolves one cardinal step for `mover`. Only a blocker whose capability equals `expected`
/// is interacted with; anything else is a plain bump.
pub(crate) fn resolve_move(
    state: &mut GameState,
    mover: EntityId,
    delta: Delta,
    expected: Capability,
    events: &mut Vec<GameEvent>,
) -> Result<MoveResolution, GameError> {
    let direction = Direction::try_from(delta)?;
    let entity = state.entities.get(mover).ok_or(GameError::UnknownEntity)?;
    let from = entity.pos;
    let to = from.offset(direction.delta());
    let impact = entity.impact();
    let duration = entity.move_duration;

    if !state.board.is_passable(to) {
        trace!(?from, ?to, "bumped into boundary");
        return Ok(MoveResolution {
            outcome: MoveOutcome::Blocked { obstruction: Obstruction::Boundary, interacted: false },
            motion: None,
        });
    }

    if let Some((blocker, capability)) = state.blocker_at(to, mover) {
        let handler = blocked_handler(capability).filter(|_| capability == expected);
        let interacted = match handler {
            Some(handler) => {
                handler(state, blocker, impact, events);
                true
            }
            None => false,
        };
        trace!(?from, ?to, ?capability, interacted, "move blocked");
        return Ok(MoveResolution {
            outcome: MoveOutcome::Blocked {
                obstruction: Obstruction::Entity { id: blocker, capability },
                interacted,
            },
            motion: None,
        });
    }

    events.push(GameEvent::MotionStarted { entity: mover, from, to });
    Ok(MoveResolution {
        outcome: MoveOutcome::Moved { from, to },
        motion: Some(Motion::new(mover, from, to, duration)),
    })
}

fn damage_obstacle(
    state: &mut GameState,
    obstacle: EntityId,
    impact: i32,
    events: &mut Vec<GameEvent>,
) {
    let Some(entity) = state.entities.get_mut(obstacle) else {
        return;
    };
    let pos = entity.pos;
    let EntityState::Obstacle { hp, .. } = &mut entity.state else {
        return;
    };
    *hp -= impact;
    let remaining = *hp;
    events.push(GameEvent::Cue(AudioCue::Chop));
    if remaining <= 0 {
        state.entities.remove(obstacle);
        events.push(GameEvent::ObstacleDestroyed { pos });
    } else {
        events.push(GameEvent::ObstacleDamaged { pos, hp: remaining });
    }
}

fn drain_resource(
    state: &mut GameState,
    controlled: EntityId,
    impact: i32,
    events: &mut Vec<GameEvent>,
) {
    let Some(entity) = state.entities.get_mut(controlled) else {
        return;
    };
    let EntityState::Controlled { resource, .. } = &mut entity.state else {
        return;
    };
    *resource -= impact;
    events.push(GameEvent::ResourceChanged {
        value: *resource,
        delta: -impact,
        reason: ResourceReason::Hit,
    });
    events.push(GameEvent::Cue(AudioCue::Hit));
}
