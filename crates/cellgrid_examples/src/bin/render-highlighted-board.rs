//! Builds a small board and renders it with the neighbors of one cell
//! highlighted, found through relative lookups.
use cellgrid::prelude::*;
use cellgrid_examples::init_tracing;
use glam::IVec2;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let grid = GridConfig::new()
        .with_items(1..=16)
        .with_columns(4)
        .with_overflow(Overflow::Constrain)
        .with_id("highlight-demo")
        .build()?;

    let center = grid.cell(1, 2).expect("in range");
    let neighbors: Vec<IVec2> = [(-1, 0), (1, 0), (0, -1), (0, 1)]
        .into_iter()
        .filter_map(|(dx, dy)| center.relative(dx, dy))
        .map(|cell| cell.position())
        .collect();

    let rendered = TextRenderer::new()
        .with_highlight(center.position())
        .with_highlights(neighbors)
        .render(&grid);
    print!("{rendered}");

    Ok(())
}
