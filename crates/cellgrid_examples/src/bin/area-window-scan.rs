//! Slides a 3x3 area window across a numbered board, including
//! negative-extent queries that anchor backward from the reference cell.
use cellgrid::prelude::*;
use cellgrid_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let grid = GridConfig::new()
        .with_columns(5)
        .with_rows(5)
        .with_overflow(Overflow::Wrap)
        .with_filler(|_, _, index| index)
        .build()?;

    print!("{}", TextRenderer::new().with_coordinates().render(&grid));

    for (x, y) in [(0, 0), (2, 2), (4, 4)] {
        let forward = grid.area(x, y, 3, 3).expect("anchor resolves under wrap");
        let backward = grid.area(x, y, -3, -3).expect("anchor resolves under wrap");
        println!(
            "\nwindow at ({x},{y}): forward {:?}, backward {:?}",
            forward.iter().map(|c| *c.contents()).collect::<Vec<_>>(),
            backward.iter().map(|c| *c.contents()).collect::<Vec<_>>()
        );
    }

    // With no overflow the same window silently shrinks at the edges.
    let clipped = GridConfig::new()
        .with_columns(5)
        .with_rows(5)
        .with_filler(|_, _, index| index)
        .build()?;
    let corner = clipped.area(3, 3, 3, 3).expect("anchor in range");
    println!(
        "\nclipped corner window: {:?}",
        corner.iter().map(|c| *c.contents()).collect::<Vec<_>>()
    );

    Ok(())
}
