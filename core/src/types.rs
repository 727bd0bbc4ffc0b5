use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    /// Neighbors of `index` in `(row, col)` order, bounded by the array's `(rows, cols)`.
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // dimensions are built from `Coord` values, so they always fit
        let bounds = (rows as Coord, cols as Coord);
        NeighborIter::new(index, bounds)
    }
}

/// Walks the clamped 3x3 window around a cell in row-major order, skipping the center.
///
/// Positions are tracked in `u16` so the window edge one past `Coord::MAX` needs no special case.
#[derive(Debug)]
pub struct NeighborIter {
    center: (u16, u16),
    row_end: u16,
    col_start: u16,
    col_end: u16,
    next: (u16, u16),
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (row, col) = (u16::from(center.0), u16::from(center.1));
        let row_start = row.saturating_sub(1);
        let row_end = (row + 2).min(bounds.0.into());
        let col_start = col.saturating_sub(1);
        let col_end = (col + 2).min(bounds.1.into());

        // an empty column span yields nothing, whatever the rows say
        let first_row = if col_start < col_end { row_start } else { row_end };

        Self {
            center: (row, col),
            row_end,
            col_start,
            col_end,
            next: (first_row, col_start),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next.0 < self.row_end {
            let (row, col) = self.next;
            self.next = if col + 1 < self.col_end {
                (row, col + 1)
            } else {
                (row + 1, self.col_start)
            };

            if (row, col) != self.center {
                // both are below a `Coord` bound
                return Some((row as Coord, col as Coord));
            }
        }
        None
    }
}
