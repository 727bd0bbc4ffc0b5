use crate::*;

impl Grid {
    /// Adds `delta` to the adjacency count of every in-bounds neighbor of `coords`.
    ///
    /// Use `+1` after placing a mine at `coords` and `-1` after removing one. The center cell is
    /// never touched.
    ///
    /// A count leaving `0..=8` means the caller broke the mine bookkeeping: debug builds panic,
    /// release builds clamp the count into range.
    pub fn adjust_neighbors(&mut self, coords: Coord2, delta: i8) {
        for pos in self.iter_neighbors(coords) {
            let cell = self.cell_mut(pos);
            let current = cell.adjacent_mine_count;
            let adjusted = current.checked_add_signed(delta).filter(|&count| count <= 8);
            debug_assert!(
                adjusted.is_some(),
                "adjacency at {:?} leaves 0..=8: {} {:+}",
                pos,
                current,
                delta
            );
            cell.adjacent_mine_count =
                adjusted.unwrap_or_else(|| current.saturating_add_signed(delta).min(8));
        }
    }

    /// Moves the mine at `from` to `to`, keeping every adjacency count in sync.
    ///
    /// Returns `false` without touching the grid when `from` holds no mine or `to` already does.
    pub fn move_mine(&mut self, from: Coord2, to: Coord2) -> bool {
        if !self[from].is_mine() || self[to].is_mine() {
            return false;
        }

        self.cell_mut(from).is_mine = false;
        self.adjust_neighbors(from, -1);

        self.cell_mut(to).is_mine = true;
        self.adjust_neighbors(to, 1);

        log::debug!("Moved mine from {:?} to {:?}", from, to);
        true
    }
}
