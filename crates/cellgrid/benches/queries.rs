mod common;

use std::hint::black_box;

use cellgrid::grid::{Grid, GridConfig, Overflow};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const SIDE: usize = 256;
const AREA_SPANS: [i32; 3] = [4, 16, 64];

fn board(overflow: Overflow) -> Grid<usize> {
    GridConfig::new()
        .with_columns(SIDE)
        .with_rows(SIDE)
        .with_overflow(overflow)
        .with_filler(|_, _, index| index)
        .build()
        .expect("bench grid")
}

fn cell_lookup_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries/cell");
    group.throughput(common::elements_throughput(SIDE * SIDE));

    for (name, overflow) in [
        ("none", Overflow::None),
        ("wrap", Overflow::Wrap),
        ("constrain", Overflow::Constrain),
    ] {
        let grid = board(overflow);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for y in -8..SIDE as i32 + 8 {
                    for x in -8..SIDE as i32 + 8 {
                        if grid.cell(x, y).is_some() {
                            hits += 1;
                        }
                    }
                }
                black_box(hits);
            });
        });
    }

    group.finish();
}

fn area_benches(c: &mut Criterion) {
    let grid = board(Overflow::Wrap);
    let mut group = c.benchmark_group("queries/area");

    for &span in &AREA_SPANS {
        group.throughput(common::elements_throughput((span * span) as usize));
        group.bench_with_input(BenchmarkId::from_parameter(span), &span, |b, &span| {
            b.iter(|| {
                let cells = grid
                    .area(SIDE as i32 / 2, SIDE as i32 / 2, span, -span)
                    .expect("anchor in range");
                black_box(cells.len());
            });
        });
    }

    group.finish();
}

fn column_benches(c: &mut Criterion) {
    let grid = board(Overflow::Constrain);
    let mut group = c.benchmark_group("queries/column");
    group.throughput(common::elements_throughput(SIDE));

    group.bench_function("constrain", |b| {
        b.iter(|| {
            let cells = grid.column(SIDE as i32 + 7).expect("clamped");
            black_box(cells.len());
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = cell_lookup_benches, area_benches, column_benches
}
criterion_main!(benches);
