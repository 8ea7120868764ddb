//! Level-to-level progression. Every level is a fresh `Game`; only the `RunCarryover`
//! record crosses the boundary, and it goes through a `CarryoverStore` on the way.

use std::io;
use std::mem;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::RunError;
use crate::game::Game;
use crate::types::{GameEvent, InputSignal, MoveOutcome, TurnState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCarryover {
    pub level: u32,
    pub resource: i32,
}

impl RunCarryover {
    pub fn first_level(config: &GameConfig) -> Self {
        Self { level: 1, resource: config.starting_resource }
    }

    pub fn next_level(self) -> Self {
        Self { level: self.level.saturating_add(1), resource: self.resource }
    }
}

/// Where the carried record lives while no level is running.
pub trait CarryoverStore {
    fn load(&mut self) -> io::Result<Option<RunCarryover>>;
    fn store(&mut self, carryover: &RunCarryover) -> io::Result<()>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryCarryover {
    saved: Option<RunCarryover>,
}

impl MemoryCarryover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Option<RunCarryover> {
        self.saved
    }
}

impl CarryoverStore for MemoryCarryover {
    fn load(&mut self) -> io::Result<Option<RunCarryover>> {
        Ok(self.saved)
    }

    fn store(&mut self, carryover: &RunCarryover) -> io::Result<()> {
        self.saved = Some(*carryover);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStop {
    AwaitingInput,
    GameOver { levels_survived: u32 },
    BudgetExhausted,
}

pub struct Run<S> {
    seed: u64,
    config: GameConfig,
    store: S,
    game: Game,
    events: Vec<GameEvent>,
    persisted: bool,
}

impl<S: CarryoverStore> Run<S> {
    pub fn new(seed: u64, config: GameConfig, store: S) -> Result<Self, RunError> {
        let game = Game::new(seed, &config, RunCarryover::first_level(&config))?;
        let mut run = Self { seed, config, store, game, events: Vec::new(), persisted: false };
        run.collect()?;
        Ok(run)
    }

    pub fn tick(&mut self, dt: f32) -> Result<(), RunError> {
        self.game.tick(dt);
        self.collect()?;
        if self.game.restart_ready() {
            self.next_level()?;
        }
        Ok(())
    }

    pub fn submit_input(&mut self, signal: InputSignal) -> Result<Option<MoveOutcome>, RunError> {
        let outcome = self.game.submit_input(signal)?;
        self.collect()?;
        Ok(outcome)
    }

    /// Ticks with a fixed `dt` until the next input point, the end of the run, or `max_ticks`.
    pub fn run_until_input(&mut self, dt: f32, max_ticks: u32) -> Result<AdvanceStop, RunError> {
        for _ in 0..max_ticks {
            if let Some(stop) = self.stop_point() {
                return Ok(stop);
            }
            self.tick(dt)?;
        }
        Ok(self.stop_point().unwrap_or(AdvanceStop::BudgetExhausted))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    fn stop_point(&self) -> Option<AdvanceStop> {
        if let Some(levels_survived) = self.game.final_level() {
            return Some(AdvanceStop::GameOver { levels_survived });
        }
        self.game.accepts_input().then_some(AdvanceStop::AwaitingInput)
    }

    fn collect(&mut self) -> Result<(), RunError> {
        self.events.extend(self.game.drain_events());
        let inactive =
            matches!(self.game.turn_state(), TurnState::LevelComplete | TurnState::GameOver);
        if inactive && !self.persisted {
            let carryover = self.game.carryover();
            self.store.store(&carryover)?;
            self.persisted = true;
            debug!(level = carryover.level, resource = carryover.resource, "carryover stored");
        }
        Ok(())
    }

    fn next_level(&mut self) -> Result<(), RunError> {
        let carried = match self.store.load()? {
            Some(carryover) => carryover,
            None => self.game.carryover(),
        };
        let next = carried.next_level();
        self.game = Game::new(self.seed, &self.config, next)?;
        self.persisted = false;
        info!(level = next.level, resource = next.resource, "entering next level");
        self.collect()
    }
}
