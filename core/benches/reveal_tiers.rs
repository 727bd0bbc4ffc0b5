use std::hint::black_box;

use avr_mines_core::*;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const TIERS: [(&str, GameConfig); 3] = [
    ("avr", GameConfig::AVR),
    ("expert", GameConfig::new_unchecked(30, 16, 99)),
    ("open", GameConfig::new_unchecked(255, 255, 0)),
];

/// First zero cell of the board, falling back to the first safe one.
fn start_cell(grid: &Grid) -> Coord2 {
    let safe = || grid.iter().filter(|(_, cell)| !cell.is_mine());
    safe()
        .find(|(_, cell)| cell.adjacent_mine_count() == 0)
        .or_else(|| safe().next())
        .map(|(coords, _)| coords)
        .unwrap()
}

fn reveal_section(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_section");
    for (name, config) in TIERS {
        let mut fractions = RngFractions::seeded(0x5eed);
        let grid = Grid::generate(config, &mut fractions).unwrap();
        let start = start_cell(&grid);

        group.bench_with_input(BenchmarkId::from_parameter(name), &grid, |b, grid| {
            b.iter_batched_ref(
                || grid.clone(),
                |grid| black_box(grid.reveal_section(black_box(start))),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, reveal_section);
criterion_main!(benches);
