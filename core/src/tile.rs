use serde::{Deserialize, Serialize};

/// One board position: mine placement, player marks, and the cached neighbor mine count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) is_flagged: bool,
    pub(crate) is_revealed: bool,
    pub(crate) adjacent_mine_count: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    /// Number of mines among the up to 8 neighbors, kept for mines as well.
    pub const fn adjacent_mine_count(self) -> u8 {
        self.adjacent_mine_count
    }

    /// Marks the cell revealed, returning whether a flag had to be cleared.
    pub(crate) fn reveal(&mut self) -> bool {
        self.is_revealed = true;
        core::mem::take(&mut self.is_flagged)
    }
}
