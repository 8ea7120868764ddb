use std::io;

use thiserror::Error;

use crate::types::TurnState;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// More placements were requested than the level has free interior cells.
    #[error("grid position pool exhausted after dispensing all {capacity} interior cells")]
    PoolExhausted { capacity: usize },
    #[error("({dx}, {dy}) is not a single cardinal step")]
    InvalidDirection { dx: i32, dy: i32 },
    #[error("move rejected while the turn state is {state:?}")]
    StateViolation { state: TurnState },
    #[error("entity is not part of the current level")]
    UnknownEntity,
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("carryover store failed")]
    Store(#[from] io::Error),
}
