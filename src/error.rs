use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Food placement failures.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    /// Every cell of the grid is covered by the snake.
    #[error("no free cell left on the {tile_count}x{tile_count} grid")]
    NoSpaceAvailable { tile_count: u16 },
}

/// Rejected input at the steering boundary.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum InputError {
    #[error("({dx}, {dy}) is not a unit direction vector")]
    InvalidDirection { dx: i32, dy: i32 },
}

/// Malformed snake segment lists.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SnakeError {
    #[error("a snake needs at least one segment")]
    Empty,
    #[error("segment ({x}, {y}) appears more than once")]
    DuplicateSegment { x: i32, y: i32 },
}

/// Invalid or unreadable game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("tile count must be greater than zero")]
    EmptyGrid,
    #[error("initial snake is invalid: {0}")]
    InitialSnake(#[from] SnakeError),
    #[error("initial snake segment ({x}, {y}) lies outside the {tile_count}x{tile_count} grid")]
    SegmentOutOfBounds { x: i32, y: i32, tile_count: u16 },
    #[error("initial snake leaves no room for food on the {tile_count}x{tile_count} grid")]
    NoRoomForFood { tile_count: u16 },
    #[error("speed milestone must be greater than zero")]
    ZeroMilestone,
    #[error("tick intervals must be at least 1ms")]
    ZeroInterval,
    #[error("minimum interval {min_speed_ms}ms exceeds the initial interval {initial_speed_ms}ms")]
    SpeedFloorAboveStart {
        min_speed_ms: u64,
        initial_speed_ms: u64,
    },
    #[error("resumed state uses a {state}x{state} grid but the config expects {config}x{config}")]
    GridMismatch { state: u16, config: u16 },
    #[error("resumed snake segment ({x}, {y}) lies outside the {tile_count}x{tile_count} grid")]
    StateOutOfBounds { x: i32, y: i32, tile_count: u16 },
    #[error("resumed food at ({x}, {y}) is outside the grid or on the snake")]
    MisplacedFood { x: i32, y: i32 },
}

/// Top-level error for the terminal front end.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
