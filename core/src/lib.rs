#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cursor::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod cursor;
mod error;
mod generator;
mod relocation;
mod reveal;
mod session;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// The handheld's 14x5 board with 14 mines.
    pub const AVR: Self = Self::new_unchecked(14, 5, 14);

    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidSize);
        }
        // the reserved cell can never hold a mine
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Result of toggling a flag on a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flagged => true,
            Self::Unflagged => true,
        }
    }
}

/// Tally of a [`Grid::reveal_section`] call, used by the caller to update its counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionReveal {
    pub revealed: CellCount,
    pub flags_cleared: CellCount,
}

/// The board: a `height x width` array of cells indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// A board with every cell zeroed and no mines.
    pub fn empty(width: Coord, height: Coord) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            cells: Array2::default((height as usize, width as usize)),
            mine_count: 0,
        })
    }

    /// A fresh board with `config.mines` mines placed from `fractions`.
    pub fn generate<F: FractionSource>(config: GameConfig, fractions: &mut F) -> Result<Self> {
        config.validate()?;
        let mut grid = Self::empty(config.width, config.height)?;
        generate_mines(&mut grid, config.mines, fractions);
        Ok(grid)
    }

    /// Builds a board with mines at exactly `mine_coords`, adjacency counts included.
    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::empty(width, height)?;

        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            if !grid.cells[coords.to_nd_index()].is_mine {
                grid.place_mine(coords);
            }
        }

        Ok(grid)
    }

    /// Zeroes every cell, then generates `mine_amount` mines.
    pub fn reset<F: FractionSource>(&mut self, mine_amount: CellCount, fractions: &mut F) {
        self.cells.fill(Cell::default());
        self.mine_count = 0;
        generate_mines(self, mine_amount, fractions);
    }

    pub fn width(&self) -> Coord {
        self.cells.dim().1 as Coord
    }

    pub fn height(&self) -> Coord {
        self.cells.dim().0 as Coord
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.width(), self.height(), self.mine_count)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// The bottom-right cell, which the generator never mines.
    pub fn reserved_coords(&self) -> Coord2 {
        (self.height() - 1, self.width() - 1)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.height() && coords.1 < self.width() {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// All cells with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Flips the flag on an unrevealed cell; revealed cells are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed {
            return MarkOutcome::NoChange;
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            MarkOutcome::Flagged
        } else {
            MarkOutcome::Unflagged
        }
    }

    pub(crate) fn place_mine(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].is_mine = true;
        self.mine_count += 1;
        self.adjust_neighbors(coords, 1);
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
