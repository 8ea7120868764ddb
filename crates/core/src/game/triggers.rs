//! What happens when the controlled entity comes to rest on a cell: pickups and the exit.

use tracing::debug;

use super::*;
use crate::content::collectible_points;

impl Game {
    pub(super) fn resolve_triggers(&mut self, pos: Pos) {
        if pos == self.state.exit {
            self.complete_level();
            return;
        }
        if let Some((id, kind)) = self.state.collectible_at(pos) {
            self.state.entities.remove(id);
            let reason = match kind {
                CollectibleKind::Food => ResourceReason::Food,
                CollectibleKind::Soda => ResourceReason::Soda,
            };
            self.change_resource(collectible_points(kind), reason);
            self.log.push(GameEvent::Collected { pos, kind });
            self.log.push(GameEvent::Cue(match kind {
                CollectibleKind::Food => AudioCue::CollectFood,
                CollectibleKind::Soda => AudioCue::CollectSoda,
            }));
        }
    }

    fn complete_level(&mut self) {
        let level = self.state.level_number;
        let resource = self.state.resource();
        debug!(level, resource, "exit reached");
        self.sweep = None;
        self.restart_remaining = self.config.restart_delay;
        self.log.push(GameEvent::LevelCompleted { level, resource });
        self.set_turn(TurnState::LevelComplete);
    }

    pub(super) fn game_over(&mut self) {
        let levels_survived = self.state.level_number;
        debug!(levels_survived, "resource exhausted");
        self.sweep = None;
        self.log.push(GameEvent::Cue(AudioCue::GameOver));
        self.set_turn(TurnState::GameOver);
        self.log.push(GameEvent::GameOver { levels_survived });
    }
}
