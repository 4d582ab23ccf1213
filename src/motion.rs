use crate::input::Direction;
use crate::snake::Cell;

/// Returns the head cell after one step in `direction`.
///
/// No clamping or wrapping is applied; the result may lie outside the grid.
#[must_use]
pub fn next_head(head: Cell, direction: Direction) -> Cell {
    let (dx, dy) = direction.delta();
    Cell {
        x: head.x + dx,
        y: head.y + dy,
    }
}

#[cfg(test)]
mod tests {
    use super::next_head;
    use crate::input::Direction;
    use crate::snake::Cell;

    #[test]
    fn head_moves_one_cell_per_direction() {
        let head = Cell::new(5, 5);

        assert_eq!(next_head(head, Direction::Up), Cell::new(5, 4));
        assert_eq!(next_head(head, Direction::Down), Cell::new(5, 6));
        assert_eq!(next_head(head, Direction::Left), Cell::new(4, 5));
        assert_eq!(next_head(head, Direction::Right), Cell::new(6, 5));
        assert_eq!(next_head(head, Direction::Idle), head);
    }

    #[test]
    fn result_is_not_clamped_to_the_grid() {
        assert_eq!(next_head(Cell::new(0, 5), Direction::Left), Cell::new(-1, 5));
        assert_eq!(next_head(Cell::new(19, 0), Direction::Up), Cell::new(19, -1));
        assert_eq!(next_head(Cell::new(19, 19), Direction::Right), Cell::new(20, 19));
    }

    #[test]
    fn next_head_is_exact_vector_addition() {
        for x in -2..22 {
            for y in -2..22 {
                let head = Cell::new(x, y);
                for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
                {
                    let (dx, dy) = direction.delta();
                    assert_eq!(next_head(head, direction), Cell::new(x + dx, y + dy));
                }
            }
        }
    }
}
