use crate::*;

/// Places `amount` mines on a mine-free `grid` in a single row-major pass, skipping the reserved
/// last cell.
///
/// Each candidate becomes a mine with probability `remaining mines / remaining candidates`, which
/// selects exactly `amount` cells without retries as long as `amount` is below the cell count.
/// Returns how many mines were placed.
pub fn generate_mines<F: FractionSource>(
    grid: &mut Grid,
    amount: CellCount,
    fractions: &mut F,
) -> CellCount {
    debug_assert_eq!(grid.mine_count(), 0, "generating over an already mined grid");

    let mut fields_left = grid.total_cells() - 1;
    let mut mines_generated: CellCount = 0;

    if amount > fields_left {
        log::warn!(
            "Minefield cannot fit {} mines, only {} cells are candidates",
            amount,
            fields_left
        );
    }

    'scan: for row in 0..grid.height() {
        for col in 0..grid.width() {
            // `fields_left` hits zero exactly at the reserved cell
            if mines_generated == amount || fields_left == 0 {
                break 'scan;
            }

            let fraction = fractions.next_fraction();
            if f64::from(fields_left) * fraction < f64::from(amount - mines_generated) {
                grid.place_mine((row, col));
                mines_generated += 1;
            }

            fields_left -= 1;
        }
    }

    if mines_generated != amount {
        log::warn!(
            "Generated minefield count mismatch, actual: {}, requested: {}",
            mines_generated,
            amount
        );
    }
    log::trace!(
        "Generated {} mines on a {}x{} grid",
        mines_generated,
        grid.width(),
        grid.height()
    );

    mines_generated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_adjacency_consistent(grid: &Grid) {
        for (coords, cell) in grid.iter() {
            let expected = grid
                .iter_neighbors(coords)
                .filter(|&pos| grid[pos].is_mine())
                .count();
            assert_eq!(
                usize::from(cell.adjacent_mine_count()),
                expected,
                "adjacency mismatch at {:?}",
                coords
            );
        }
    }

    #[test]
    fn zero_fractions_fill_the_first_cells() {
        let mut grid = Grid::empty(14, 5).unwrap();
        let mut fractions = ReplayFractions::new([0.0]);

        let placed = generate_mines(&mut grid, 14, &mut fractions);

        assert_eq!(placed, 14);
        assert_eq!(grid.mine_count(), 14);
        for (index, (coords, cell)) in grid.iter().enumerate() {
            assert_eq!(cell.is_mine(), index < 14, "unexpected mine state at {:?}", coords);
        }
        assert!(!grid[(4, 13)].is_mine());
        assert_adjacency_consistent(&grid);
    }

    #[test]
    fn near_one_fractions_push_mines_to_the_end() {
        let mut grid = Grid::empty(4, 3).unwrap();
        let mut fractions = ReplayFractions::new([0.999]);

        let placed = generate_mines(&mut grid, 3, &mut fractions);

        assert_eq!(placed, 3);
        // the last three candidates before the reserved cell
        assert!(grid[(2, 0)].is_mine());
        assert!(grid[(2, 1)].is_mine());
        assert!(grid[(2, 2)].is_mine());
        assert!(!grid[(2, 3)].is_mine());
        assert_adjacency_consistent(&grid);
    }

    #[test]
    fn zero_amount_places_nothing() {
        let mut grid = Grid::empty(3, 3).unwrap();
        let mut fractions = ReplayFractions::new([0.0]);

        assert_eq!(generate_mines(&mut grid, 0, &mut fractions), 0);
        assert!(grid.iter().all(|(_, cell)| cell == Cell::default()));
    }

    #[test]
    fn all_candidates_become_mines_when_requested() {
        let mut grid = Grid::empty(3, 3).unwrap();
        let mut fractions = RngFractions::seeded(5);

        assert_eq!(generate_mines(&mut grid, 8, &mut fractions), 8);
        assert!(!grid[grid.reserved_coords()].is_mine());
        assert_eq!(grid[(2, 2)].adjacent_mine_count(), 3);
        assert_adjacency_consistent(&grid);
    }

    #[test]
    fn random_generation_is_exact_and_consistent() {
        for seed in 0..50 {
            let mut grid = Grid::empty(14, 5).unwrap();
            let mut fractions = RngFractions::seeded(seed);

            let placed = generate_mines(&mut grid, 14, &mut fractions);

            assert_eq!(placed, 14);
            assert_eq!(grid.iter().filter(|(_, cell)| cell.is_mine()).count(), 14);
            assert!(!grid[grid.reserved_coords()].is_mine());
            assert_adjacency_consistent(&grid);
        }
    }

    #[test]
    fn single_cell_board_never_gets_a_mine() {
        let mut grid = Grid::empty(1, 1).unwrap();
        let mut fractions = ReplayFractions::new([0.0]);

        assert_eq!(generate_mines(&mut grid, 1, &mut fractions), 0);
        assert!(!grid[(0, 0)].is_mine());
    }
}
