pub mod config;
pub mod content;
pub mod error;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod movement;
pub mod registry;
pub mod replay;
pub mod run;
pub mod state;
pub mod types;

pub use config::{CountRange, GameConfig, LevelConfig, hazard_count};
pub use error::{GameError, RunError};
pub use game::{Game, chase_direction};
pub use journal::{InputJournal, InputRecord};
pub use mapgen::{GeneratedLevel, GridPositionPool, LevelLayoutGenerator, generate_level};
pub use movement::Motion;
pub use registry::EntityRegistry;
pub use replay::*;
pub use run::{AdvanceStop, CarryoverStore, MemoryCarryover, Run, RunCarryover};
pub use state::{Board, Entity, EntityState, GameState, Tile};
pub use types::*;
