use crate::snake::{Cell, Snake};

/// Kind of fatal collision for a candidate head cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Classifies `head` against the walls and the current body.
///
/// The body is checked as it stands before the move, tail included.
#[must_use]
pub fn classify(head: Cell, snake: &Snake, tile_count: u16) -> Option<Collision> {
    if !head.is_within_grid(tile_count) {
        return Some(Collision::Wall);
    }

    if snake.occupies(head) {
        return Some(Collision::SelfCollision);
    }

    None
}

/// Returns true when moving the head to `head` ends the run.
#[must_use]
pub fn is_fatal(head: Cell, snake: &Snake, tile_count: u16) -> bool {
    classify(head, snake, tile_count).is_some()
}

/// Returns true when the head lands on the food cell.
#[must_use]
pub fn check_food_collision(head: Cell, food: Cell) -> bool {
    head == food
}
