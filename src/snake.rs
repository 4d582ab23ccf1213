use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::SnakeError;

/// Grid cell in logical tile coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the cell lies inside a `tile_count` square grid.
    #[must_use]
    pub fn is_within_grid(self, tile_count: u16) -> bool {
        let upper = i32::from(tile_count);
        self.x >= 0 && self.y >= 0 && self.x < upper && self.y < upper
    }
}

/// Ordered snake body, head first.
///
/// Always holds at least one segment and never the same cell twice.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    pub fn from_segments(segments: Vec<Cell>) -> Result<Self, SnakeError> {
        if segments.is_empty() {
            return Err(SnakeError::Empty);
        }

        let mut seen = HashSet::with_capacity(segments.len());
        for segment in &segments {
            if !seen.insert(*segment) {
                return Err(SnakeError::DuplicateSegment {
                    x: segment.x,
                    y: segment.y,
                });
            }
        }

        Ok(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        // `from_segments` rejects empty bodies and `pop_tail` never removes the last cell.
        self.body[0]
    }

    /// Returns the tail cell.
    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Prepends a new head.
    pub(crate) fn push_head(&mut self, head: Cell) {
        debug_assert!(!self.occupies(head), "new head overlaps the body");
        self.body.push_front(head);
    }

    /// Drops the tail segment, keeping at least the head.
    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
