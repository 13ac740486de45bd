//! Queries the same board under the three overflow policies to show how
//! out-of-range coordinates resolve.
use cellgrid::prelude::*;
use cellgrid_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let grid = GridConfig::new()
        .with_items('a'..='i')
        .with_columns(3)
        .with_id("policy-demo")
        .build()?;

    println!("board '{}' ({}x{}):", grid.id(), grid.columns(), grid.rows());
    print!("{}", TextRenderer::new().render(&grid));

    for (name, policy) in [
        ("none", Overflow::None),
        ("wrap", Overflow::Wrap),
        ("constrain", Overflow::Constrain),
    ] {
        println!("\npolicy = {name}");
        for (x, y) in [(4, 1), (-1, -1), (1, 7)] {
            let resolved = grid.cell_with(x, y, OverflowOverrides::both(policy));
            match resolved {
                Some(cell) => {
                    let p = cell.position();
                    println!("  ({x:>2},{y:>2}) -> ({},{}) = {}", p.x, p.y, cell.contents());
                }
                None => println!("  ({x:>2},{y:>2}) -> absent"),
            }
        }
    }

    Ok(())
}
