use serde::{Deserialize, Serialize};

use crate::*;

/// Moves `current` by `delta` along an axis of `limit` cells.
///
/// Stepping below zero lands on `limit - 1` and stepping at or past `limit` lands on `0`. This is
/// a wrap for single steps, not a modulo: larger deltas still snap to the opposite edge.
pub fn move_wrapping(current: Coord, delta: i8, limit: Coord) -> Coord {
    debug_assert!(current < limit, "cursor {} outside axis of {}", current, limit);

    let next = i16::from(current) + i16::from(delta);
    if next < 0 {
        limit.saturating_sub(1)
    } else if next >= i16::from(limit) {
        0
    } else {
        next as Coord
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Selected cell on the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub row: Coord,
    pub col: Coord,
}

impl Cursor {
    pub const fn coords(self) -> Coord2 {
        (self.row, self.col)
    }

    /// Steps one cell in `direction` on a `width x height` board, wrapping at the edges.
    pub fn step(&mut self, direction: Direction, width: Coord, height: Coord) {
        use Direction::*;

        match direction {
            Up => self.row = move_wrapping(self.row, -1, height),
            Down => self.row = move_wrapping(self.row, 1, height),
            Left => self.col = move_wrapping(self.col, -1, width),
            Right => self.col = move_wrapping(self.col, 1, width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_edges() {
        assert_eq!(move_wrapping(0, -1, 5), 4);
        assert_eq!(move_wrapping(4, 1, 5), 0);
        assert_eq!(move_wrapping(13, 1, 14), 0);
    }

    #[test]
    fn zero_delta_keeps_position() {
        for k in 0..14 {
            assert_eq!(move_wrapping(k, 0, 14), k);
        }
    }

    #[test]
    fn interior_steps_move_by_delta() {
        assert_eq!(move_wrapping(2, 1, 5), 3);
        assert_eq!(move_wrapping(2, -1, 5), 1);
        assert_eq!(move_wrapping(1, 3, 14), 4);
    }

    #[test]
    fn large_deltas_snap_to_the_opposite_edge() {
        assert_eq!(move_wrapping(1, -3, 14), 13);
        assert_eq!(move_wrapping(10, 7, 14), 0);
        assert_eq!(move_wrapping(Coord::MAX - 1, i8::MAX, Coord::MAX), 0);
    }

    #[test]
    fn single_cell_axis_stays_put() {
        assert_eq!(move_wrapping(0, -1, 1), 0);
        assert_eq!(move_wrapping(0, 1, 1), 0);
    }

    #[test]
    fn cursor_steps_along_matching_axis() {
        let mut cursor = Cursor::default();

        cursor.step(Direction::Up, 14, 5);
        assert_eq!(cursor.coords(), (4, 0));
        cursor.step(Direction::Left, 14, 5);
        assert_eq!(cursor.coords(), (4, 13));
        cursor.step(Direction::Right, 14, 5);
        assert_eq!(cursor.coords(), (4, 0));
        cursor.step(Direction::Down, 14, 5);
        assert_eq!(cursor.coords(), (0, 0));
    }
}
