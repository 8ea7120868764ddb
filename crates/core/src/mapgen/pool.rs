//! The shrinking set of free interior cells that one generation pass draws from.

use rand_chacha::ChaCha8Rng;

use crate::error::GameError;
use crate::types::Pos;

use super::seed::random_index;

#[derive(Clone, Debug, Default)]
pub struct GridPositionPool {
    cells: Vec<Pos>,
    capacity: usize,
}

impl GridPositionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refills with every interior cell (`1..=columns-2` x `1..=rows-2`).
    pub fn reset(&mut self, columns: i32, rows: i32) {
        self.cells.clear();
        for x in 1..(columns - 1) {
            for y in 1..(rows - 1) {
                self.cells.push(Pos { y, x });
            }
        }
        self.capacity = self.cells.len();
    }

    /// Removes a uniformly chosen cell. A cell never comes back until the next `reset`.
    pub fn take(&mut self, rng: &mut ChaCha8Rng) -> Result<Pos, GameError> {
        if self.cells.is_empty() {
            return Err(GameError::PoolExhausted { capacity: self.capacity });
        }
        let index = random_index(rng, self.cells.len());
        Ok(self.cells.swap_remove(index))
    }

    /// Withdraws a specific cell so random draws can never land on it.
    pub fn reserve(&mut self, pos: Pos) -> bool {
        match self.cells.iter().position(|cell| *cell == pos) {
            Some(index) => {
                self.cells.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
