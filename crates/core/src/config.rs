//! Tunable run configuration and the per-level record derived from it.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Inclusive `[min, max]` bound for a randomly drawn placement count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn exact(count: u32) -> Self {
        Self { min: count, max: count }
    }

    pub fn contains(&self, count: u32) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub columns: i32,
    pub rows: i32,
    pub obstacle_count: CountRange,
    pub collectible_count: CountRange,
    /// Seconds the level banner holds input back after layout.
    pub level_start_delay: f32,
    /// Seconds between the controlled move and the first hazard step.
    pub turn_delay: f32,
    /// Seconds between reaching the exit and regenerating the next level.
    pub restart_delay: f32,
    /// Seconds a single-cell interpolation takes, shared by every mover.
    pub move_duration: f32,
    pub starting_resource: i32,
    pub wall_damage: i32,
}

impl GameConfig {
    pub const DEFAULT_COLUMNS: i32 = 16;
    pub const DEFAULT_ROWS: i32 = 9;
    pub const MIN_GRID_SIDE: i32 = 4;

    pub fn validate(&self) -> Result<(), GameError> {
        if self.columns < Self::MIN_GRID_SIDE || self.rows < Self::MIN_GRID_SIDE {
            return Err(GameError::InvalidConfig(format!(
                "grid {}x{} is smaller than {min}x{min}",
                self.columns,
                self.rows,
                min = Self::MIN_GRID_SIDE
            )));
        }
        for (name, range) in
            [("obstacle_count", self.obstacle_count), ("collectible_count", self.collectible_count)]
        {
            if range.min > range.max {
                return Err(GameError::InvalidConfig(format!(
                    "{name} range {}..={} is inverted",
                    range.min, range.max
                )));
            }
        }
        if self.wall_damage < 1 {
            return Err(GameError::InvalidConfig(format!(
                "wall_damage {} must be at least 1",
                self.wall_damage
            )));
        }
        if !(self.move_duration.is_finite() && self.move_duration > 0.0) {
            return Err(GameError::InvalidConfig("move_duration must be positive".to_string()));
        }
        for (name, delay) in [
            ("level_start_delay", self.level_start_delay),
            ("turn_delay", self.turn_delay),
            ("restart_delay", self.restart_delay),
        ] {
            if !(delay.is_finite() && delay >= 0.0) {
                return Err(GameError::InvalidConfig(format!("{name} must be non-negative")));
            }
        }
        Ok(())
    }

    pub fn level(&self, level_number: u32) -> LevelConfig {
        LevelConfig {
            columns: self.columns,
            rows: self.rows,
            obstacle_count: self.obstacle_count,
            collectible_count: self.collectible_count,
            level_number,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
            rows: Self::DEFAULT_ROWS,
            obstacle_count: CountRange::new(5, 9),
            collectible_count: CountRange::new(1, 5),
            level_start_delay: 2.0,
            turn_delay: 0.1,
            restart_delay: 1.0,
            move_duration: 0.1,
            starting_resource: 100,
            wall_damage: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelConfig {
    pub columns: i32,
    pub rows: i32,
    pub obstacle_count: CountRange,
    pub collectible_count: CountRange,
    pub level_number: u32,
}

impl LevelConfig {
    pub fn hazard_count(&self) -> CountRange {
        CountRange::exact(hazard_count(self.level_number))
    }

    /// Cells with `1 <= x <= columns - 2` and `1 <= y <= rows - 2`.
    pub fn interior_cell_count(&self) -> usize {
        let width = (self.columns - 2).max(0) as usize;
        let height = (self.rows - 2).max(0) as usize;
        width * height
    }
}

/// `floor(log2(level))`, so levels 1, 2, 4, 8 bring 0, 1, 2, 3 hazards.
pub fn hazard_count(level_number: u32) -> u32 {
    level_number.checked_ilog2().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_count_follows_log2_of_level() {
        let expected = [(1, 0), (2, 1), (3, 1), (4, 2), (7, 2), (8, 3), (16, 4), (100, 6)];
        for (level, count) in expected {
            assert_eq!(hazard_count(level), count, "level {level}");
        }
        assert_eq!(hazard_count(0), 0);
    }

    #[test]
    fn level_config_pins_hazard_range_to_single_value() {
        let level = GameConfig::default().level(5);
        assert_eq!(level.hazard_count(), CountRange::exact(2));
        assert_eq!(level.interior_cell_count(), 14 * 7);
    }

    #[test]
    fn validate_rejects_inverted_ranges_and_tiny_grids() {
        let mut config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));

        config.collectible_count = CountRange::new(4, 2);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig { columns: 3, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig { move_duration: 0.0, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_wall_damage_that_cannot_break_obstacles() {
        for wall_damage in [0, -1, -5] {
            let config = GameConfig { wall_damage, ..GameConfig::default() };
            assert!(
                matches!(config.validate(), Err(GameError::InvalidConfig(_))),
                "wall_damage {wall_damage}"
            );
        }
        let config = GameConfig { wall_damage: 1, ..GameConfig::default() };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "columns": 10, "obstacle_count": { "min": 0, "max": 2 } }"#)
                .expect("partial config");
        assert_eq!(config.columns, 10);
        assert_eq!(config.rows, GameConfig::DEFAULT_ROWS);
        assert_eq!(config.obstacle_count, CountRange::new(0, 2));
        assert_eq!(config.starting_resource, 100);
    }
}
