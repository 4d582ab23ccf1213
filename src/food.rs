use rand::Rng;

use crate::error::PlacementError;
use crate::snake::{Cell, Snake};

/// Picks a uniformly random grid cell that the snake does not occupy.
///
/// Candidates are drawn over the whole `tile_count` square and redrawn while
/// they land on the snake, so the expected number of draws grows with the
/// occupied fraction. A fully covered grid is reported up front instead of
/// sampling forever.
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    snake: &Snake,
    tile_count: u16,
) -> Result<Cell, PlacementError> {
    if free_cells(snake, tile_count) == 0 {
        return Err(PlacementError::NoSpaceAvailable { tile_count });
    }

    let upper = i32::from(tile_count);
    loop {
        let candidate = Cell {
            x: rng.gen_range(0..upper),
            y: rng.gen_range(0..upper),
        };
        if !snake.occupies(candidate) {
            return Ok(candidate);
        }
    }
}

/// Number of grid cells not covered by the snake.
#[must_use]
pub fn free_cells(snake: &Snake, tile_count: u16) -> usize {
    let side = usize::from(tile_count);
    let occupied = snake
        .segments()
        .filter(|segment| segment.is_within_grid(tile_count))
        .count();
    (side * side).saturating_sub(occupied)
}
