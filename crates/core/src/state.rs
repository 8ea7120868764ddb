use slotmap::SlotMap;

use crate::registry::EntityRegistry;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Floor { variant: u8 },
    Boundary { variant: u8 },
}

impl Tile {
    pub fn is_passable(self) -> bool {
        matches!(self, Tile::Floor { .. })
    }
}

/// The `(columns + 2) x (rows + 2)` level grid, addressed from `-1` to `columns` / `rows`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub columns: i32,
    pub rows: i32,
    pub tiles: Vec<Tile>,
}

impl Board {
    pub fn new(columns: i32, rows: i32) -> Self {
        let width = (columns + 2).max(0) as usize;
        let height = (rows + 2).max(0) as usize;
        let mut board = Self { columns, rows, tiles: vec![Tile::Floor { variant: 0 }; width * height] };
        for y in -1..=rows {
            for x in -1..=columns {
                let pos = Pos { y, x };
                if board.is_border(pos) {
                    board.set_tile(pos, Tile::Boundary { variant: 0 });
                }
            }
        }
        board
    }

    pub fn in_grid(&self, pos: Pos) -> bool {
        (-1..=self.columns).contains(&pos.x) && (-1..=self.rows).contains(&pos.y)
    }

    /// The two outermost rings on each side are impassable.
    pub fn is_border(&self, pos: Pos) -> bool {
        let x_ring = pos.x <= 0 || pos.x >= self.columns - 1;
        let y_ring = pos.y <= 0 || pos.y >= self.rows - 1;
        x_ring || y_ring
    }

    pub fn is_interior(&self, pos: Pos) -> bool {
        self.in_grid(pos) && !self.is_border(pos)
    }

    pub fn tile_at(&self, pos: Pos) -> Tile {
        if !self.in_grid(pos) {
            return Tile::Boundary { variant: 0 };
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        if !self.in_grid(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_passable(&self, pos: Pos) -> bool {
        self.tile_at(pos).is_passable()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        (-1..=self.rows)
            .flat_map(move |y| (-1..=self.columns).map(move |x| Pos { y, x }))
            .map(|pos| (pos, self.tile_at(pos)))
    }

    fn index(&self, pos: Pos) -> usize {
        let width = (self.columns + 2) as usize;
        ((pos.y + 1) as usize) * width + ((pos.x + 1) as usize)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EntityState {
    Obstacle { variant: u8, hp: i32 },
    Collectible { kind: CollectibleKind },
    Hazard { kind: HazardKind, damage: i32, skip_move: bool },
    Controlled { resource: i32, impact: i32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub pos: Pos,
    pub move_duration: f32,
    pub state: EntityState,
}

impl Entity {
    pub fn capability(&self) -> Capability {
        match self.state {
            EntityState::Obstacle { .. } => Capability::Obstacle,
            EntityState::Collectible { .. } => Capability::Collectible,
            EntityState::Hazard { .. } => Capability::Hazard,
            EntityState::Controlled { .. } => Capability::Controlled,
        }
    }

    /// Collectibles are pickups: movers pass onto them instead of bumping.
    pub fn blocks_movement(&self) -> bool {
        !matches!(self.state, EntityState::Collectible { .. })
    }

    /// Strength this entity applies to whatever blocks it.
    pub fn impact(&self) -> i32 {
        match self.state {
            EntityState::Hazard { damage, .. } => damage,
            EntityState::Controlled { impact, .. } => impact,
            EntityState::Obstacle { .. } | EntityState::Collectible { .. } => 0,
        }
    }
}

pub struct GameState {
    pub board: Board,
    pub entities: SlotMap<EntityId, Entity>,
    pub controlled: EntityId,
    pub hazards: EntityRegistry,
    pub exit: Pos,
    pub level_number: u32,
}

impl GameState {
    pub fn new(board: Board, exit: Pos, level_number: u32) -> Self {
        Self {
            board,
            entities: SlotMap::with_key(),
            controlled: EntityId::default(),
            hazards: EntityRegistry::new(),
            exit,
            level_number,
        }
    }

    pub fn spawn(&mut self, pos: Pos, move_duration: f32, state: EntityState) -> EntityId {
        self.entities.insert_with_key(|id| Entity { id, pos, move_duration, state })
    }

    pub fn spawn_controlled(
        &mut self,
        pos: Pos,
        move_duration: f32,
        resource: i32,
        impact: i32,
    ) -> EntityId {
        let id = self.spawn(pos, move_duration, EntityState::Controlled { resource, impact });
        self.controlled = id;
        id
    }

    pub fn controlled_pos(&self) -> Pos {
        self.entities[self.controlled].pos
    }

    pub fn resource(&self) -> i32 {
        match self.entities[self.controlled].state {
            EntityState::Controlled { resource, .. } => resource,
            _ => 0,
        }
    }

    /// Live lookup of whatever would stop a mover at `pos`; nothing is cached between probes.
    pub fn blocker_at(&self, pos: Pos, ignore: EntityId) -> Option<(EntityId, Capability)> {
        self.entities
            .iter()
            .filter(|(id, entity)| *id != ignore && entity.pos == pos && entity.blocks_movement())
            .map(|(id, entity)| (id, entity.capability()))
            .next()
    }

    pub fn collectible_at(&self, pos: Pos) -> Option<(EntityId, CollectibleKind)> {
        self.entities.iter().find_map(|(id, entity)| match entity.state {
            EntityState::Collectible { kind } if entity.pos == pos => Some((id, kind)),
            _ => None,
        })
    }
}
