use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::score::SpeedRules;
use crate::snake::{Cell, Snake};

/// Side length of the square play grid.
pub const DEFAULT_TILE_COUNT: u16 = 20;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Minimum tick interval in milliseconds.
pub const DEFAULT_MIN_SPEED_MS: u64 = 50;

/// Interval reduction applied at each score milestone.
pub const DEFAULT_SPEED_STEP_MS: u64 = 20;

/// Score multiple that triggers a speed-up.
pub const DEFAULT_SPEED_MILESTONE: u32 = 50;

/// Points per food.
pub const DEFAULT_FOOD_REWARD: u32 = 10;

/// Starting snake, head first.
pub const DEFAULT_INITIAL_SNAKE: [Cell; 3] = [Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)];

/// Terminal columns drawn per grid cell; terminal glyphs are about twice as
/// tall as they are wide.
pub const CELL_WIDTH: u16 = 2;

/// Glyph for one grid cell.
pub const GLYPH_CELL: &str = "██";

/// Session settings, loadable from a JSON file.
///
/// Missing fields fall back to the defaults above.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub tile_count: u16,
    pub initial_snake: Vec<Cell>,
    pub initial_speed_ms: u64,
    pub min_speed_ms: u64,
    pub speed_step_ms: u64,
    pub speed_milestone: u32,
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            initial_snake: DEFAULT_INITIAL_SNAKE.to_vec(),
            initial_speed_ms: DEFAULT_TICK_INTERVAL_MS,
            min_speed_ms: DEFAULT_MIN_SPEED_MS,
            speed_step_ms: DEFAULT_SPEED_STEP_MS,
            speed_milestone: DEFAULT_SPEED_MILESTONE,
            food_reward: DEFAULT_FOOD_REWARD,
        }
    }
}

impl GameConfig {
    /// Reads a config file. The result is not validated yet.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that a session can start from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_count == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        let snake = self.initial_snake()?;
        if let Some(outside) = snake
            .segments()
            .find(|segment| !segment.is_within_grid(self.tile_count))
        {
            return Err(ConfigError::SegmentOutOfBounds {
                x: outside.x,
                y: outside.y,
                tile_count: self.tile_count,
            });
        }

        if snake.len() >= usize::from(self.tile_count) * usize::from(self.tile_count) {
            return Err(ConfigError::NoRoomForFood {
                tile_count: self.tile_count,
            });
        }

        if self.speed_milestone == 0 {
            return Err(ConfigError::ZeroMilestone);
        }

        if self.min_speed_ms == 0 || self.initial_speed_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::SpeedFloorAboveStart {
                min_speed_ms: self.min_speed_ms,
                initial_speed_ms: self.initial_speed_ms,
            });
        }

        Ok(())
    }

    /// Builds the starting snake.
    pub fn initial_snake(&self) -> Result<Snake, ConfigError> {
        Ok(Snake::from_segments(self.initial_snake.clone())?)
    }

    /// Score/speed ramp described by this configuration.
    #[must_use]
    pub fn speed_rules(&self) -> SpeedRules {
        SpeedRules {
            food_reward: self.food_reward,
            milestone: self.speed_milestone,
            step_ms: self.speed_step_ms,
            min_speed_ms: self.min_speed_ms,
        }
    }
}

/// Colors for the play field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border: Color,
    pub hud: Color,
    pub hud_muted: Color,
}

/// Dark field, red head, green body, white food.
pub const PALETTE_CLASSIC: Palette = Palette {
    background: Color::Rgb(17, 17, 17),
    snake_head: Color::Red,
    snake_body: Color::Green,
    food: Color::White,
    border: Color::DarkGray,
    hud: Color::White,
    hud_muted: Color::DarkGray,
};
