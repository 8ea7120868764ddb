use daycrawl_core::{
    AudioCue, CarryoverStore, Game, GameEvent, InputSignal, Run, RunError, TurnState,
};
use macroquad::prelude::KeyCode;
use tracing::{debug, info};

use crate::ui_text::{counter_text, cue_name, food_text};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::Left, KeyCode::A];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::Right, KeyCode::D];
const UP_KEYS: [KeyCode; 2] = [KeyCode::Up, KeyCode::W];
const DOWN_KEYS: [KeyCode; 2] = [KeyCode::Down, KeyCode::S];

/// Folds the held arrow/WASD keys into one directional signal; opposite keys cancel.
pub fn signal_from_keys(keys_down: &[KeyCode]) -> InputSignal {
    let held = |keys: &[KeyCode]| keys.iter().any(|key| keys_down.contains(key));
    let horizontal = i8::from(held(&RIGHT_KEYS)) - i8::from(held(&LEFT_KEYS));
    let vertical = i8::from(held(&UP_KEYS)) - i8::from(held(&DOWN_KEYS));
    InputSignal::new(horizontal, vertical)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    DayBanner { day: u32 },
    Playing,
    Starved { days: u32 },
}

/// An input that was accepted by the simulation this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedInput {
    pub level: u32,
    pub signal: InputSignal,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub counter: String,
    /// Inputs accepted during the current frame's `tick()` call.
    /// Drained by the caller after each tick to append to the run journal.
    pub accepted_inputs: Vec<AcceptedInput>,
    /// Cues raised during the current frame, in event order.
    pub cues: Vec<AudioCue>,
}

impl AppState {
    pub fn new(game: &Game) -> Self {
        Self {
            mode: mode_for(game),
            counter: food_text(game.resource()),
            accepted_inputs: Vec::new(),
            cues: Vec::new(),
        }
    }

    /// One rendered frame: offer the held direction, advance the clock, then fold the events.
    pub fn tick<S: CarryoverStore>(
        &mut self,
        run: &mut Run<S>,
        keys_down: &[KeyCode],
        dt: f32,
    ) -> Result<(), RunError> {
        self.accepted_inputs.clear();
        self.cues.clear();
        if matches!(self.mode, AppMode::Starved { .. }) {
            return Ok(());
        }

        let signal = signal_from_keys(keys_down);
        if signal != InputSignal::IDLE && run.game().accepts_input() {
            let level = run.game().level_number();
            if run.submit_input(signal)?.is_some() {
                self.accepted_inputs.push(AcceptedInput { level, signal });
            }
        }
        run.tick(dt)?;

        for event in run.drain_events() {
            self.apply_event(run.game(), &event);
        }
        Ok(())
    }

    fn apply_event(&mut self, game: &Game, event: &GameEvent) {
        match *event {
            GameEvent::LevelStarted { level } => {
                self.mode = AppMode::DayBanner { day: level };
                self.counter = food_text(game.resource());
            }
            GameEvent::TurnChanged { from: TurnState::Setup, .. } => {
                self.mode = AppMode::Playing;
            }
            GameEvent::ResourceChanged { value, delta, reason } => {
                self.counter = counter_text(value, delta, reason);
            }
            GameEvent::Cue(cue) => {
                debug!(cue = cue_name(cue), "play cue");
                self.cues.push(cue);
            }
            GameEvent::LevelCompleted { level, resource } => {
                info!(level, resource, "day survived");
            }
            GameEvent::GameOver { levels_survived } => {
                info!(levels_survived, "run over");
                self.mode = AppMode::Starved { days: levels_survived };
            }
            _ => {}
        }
    }
}

fn mode_for(game: &Game) -> AppMode {
    match game.turn_state() {
        TurnState::Setup => AppMode::DayBanner { day: game.level_number() },
        TurnState::GameOver => AppMode::Starved { days: game.level_number() },
        TurnState::ControlledTurn | TurnState::HazardPhase | TurnState::LevelComplete => {
            AppMode::Playing
        }
    }
}
