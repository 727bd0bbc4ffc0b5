use alloc::collections::VecDeque;

use crate::*;

impl Grid {
    /// Marks every cell revealed, clearing any flags left on the board.
    pub fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reveal();
        }
    }

    /// Reveals `start`, and when it borders no mines, the whole zero region around it plus that
    /// region's numbered border.
    ///
    /// `start` must be unrevealed and not a mine. Mines are never revealed here. Flags on revealed
    /// cells are cleared and counted so the caller can keep its counters in step.
    pub fn reveal_section(&mut self, start: Coord2) -> SectionReveal {
        debug_assert!(!self[start].is_mine(), "revealing a mine at {:?}", start);
        debug_assert!(!self[start].is_revealed(), "{:?} already revealed", start);

        let mut tally = SectionReveal::default();
        self.reveal_counted(start, &mut tally);

        if self[start].adjacent_mine_count() != 0 {
            return tally;
        }

        let mut to_visit = VecDeque::from([start]);
        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.iter_neighbors(visit_coords) {
                let cell = self[pos];
                if cell.is_revealed() || cell.is_mine() {
                    continue;
                }

                self.reveal_counted(pos, &mut tally);
                if cell.adjacent_mine_count() == 0 {
                    to_visit.push_back(pos);
                }
            }
        }

        log::trace!(
            "Revealed section at {:?}: {} cells, {} flags cleared",
            start,
            tally.revealed,
            tally.flags_cleared
        );
        tally
    }

    fn reveal_counted(&mut self, coords: Coord2, tally: &mut SectionReveal) {
        if self.cell_mut(coords).reveal() {
            tally.flags_cleared += 1;
        }
        tally.revealed += 1;
    }
}
