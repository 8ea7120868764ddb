use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::error::GameError;

new_key_type! {
    pub struct EntityId;
}

/// A grid cell. Border rings sit at `-1`, `0`, `columns - 1` and `columns` (same for rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, delta: Delta) -> Self {
        Self { y: self.y + delta.dy, x: self.x + delta.dx }
    }

    pub fn as_f32(self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }
}

/// A raw step request. Only the four unit vectors are legal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn delta(self) -> Delta {
        match self {
            Direction::Up => Delta { dx: 0, dy: 1 },
            Direction::Down => Delta { dx: 0, dy: -1 },
            Direction::Left => Delta { dx: -1, dy: 0 },
            Direction::Right => Delta { dx: 1, dy: 0 },
        }
    }
}

impl TryFrom<Delta> for Direction {
    type Error = GameError;

    fn try_from(delta: Delta) -> Result<Self, Self::Error> {
        match (delta.dx, delta.dy) {
            (0, 1) => Ok(Direction::Up),
            (0, -1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            (dx, dy) => Err(GameError::InvalidDirection { dx, dy }),
        }
    }
}

/// Normalized directional input for one poll: each axis is -1, 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputSignal {
    pub horizontal: i8,
    pub vertical: i8,
}

impl InputSignal {
    pub const IDLE: InputSignal = InputSignal { horizontal: 0, vertical: 0 };

    pub fn new(horizontal: i8, vertical: i8) -> Self {
        Self { horizontal: horizontal.signum(), vertical: vertical.signum() }
    }

    pub fn from_direction(direction: Direction) -> Self {
        let delta = direction.delta();
        Self::new(delta.dx as i8, delta.dy as i8)
    }

    /// Horizontal wins over vertical; a diagonal keeps only its horizontal part.
    pub fn resolve(self) -> Option<Direction> {
        match (self.horizontal.signum(), self.vertical.signum()) {
            (1, _) => Some(Direction::Right),
            (-1, _) => Some(Direction::Left),
            (_, 1) => Some(Direction::Up),
            (_, -1) => Some(Direction::Down),
            _ => None,
        }
    }
}

/// What an entity's collision represents to a mover that bumps into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Obstacle,
    Collectible,
    Hazard,
    Controlled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Food,
    Soda,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    Stalker,
    Brute,
}

/// Placement categories reported to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Floor,
    Boundary,
    Obstacle,
    Collectible,
    Hazard,
    Exit,
    Controlled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    Setup,
    ControlledTurn,
    HazardPhase,
    LevelComplete,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Obstruction {
    Boundary,
    Entity { id: EntityId, capability: Capability },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: Pos, to: Pos },
    Blocked { obstruction: Obstruction, interacted: bool },
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazardAction {
    Skipped,
    Attempted(MoveOutcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceReason {
    Step,
    Food,
    Soda,
    Hit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    Move,
    Chop,
    CollectFood,
    CollectSoda,
    Hit,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    LevelStarted { level: u32 },
    Placed { category: Category, variant: u8, pos: Pos },
    TurnChanged { from: TurnState, to: TurnState },
    MotionStarted { entity: EntityId, from: Pos, to: Pos },
    MotionFinished { entity: EntityId, pos: Pos },
    ResourceChanged { value: i32, delta: i32, reason: ResourceReason },
    ObstacleDamaged { pos: Pos, hp: i32 },
    ObstacleDestroyed { pos: Pos },
    Collected { pos: Pos, kind: CollectibleKind },
    HazardActed { entity: EntityId, action: HazardAction },
    Cue(AudioCue),
    LevelCompleted { level: u32, resource: i32 },
    GameOver { levels_survived: u32 },
}
