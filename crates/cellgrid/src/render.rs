//! Console rendering for grids.
//!
//! [`TextRenderer`] draws a bordered ASCII table from any grid whose
//! contents implement [`Display`](std::fmt::Display), optionally marking
//! highlighted coordinates and annotating each cell with its coordinate.
//! It consumes only the grid's public read interface.
use std::fmt::Write;

use glam::IVec2;

use crate::grid::Grid;

/// Builder-style textual grid renderer.
///
/// Defaults: no highlights, no coordinate annotations.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    highlights: Vec<IVec2>,
    show_coordinates: bool,
}

impl TextRenderer {
    /// Creates a renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a coordinate to render with highlight brackets.
    pub fn with_highlight(mut self, position: IVec2) -> Self {
        self.highlights.push(position);
        self
    }

    /// Marks several coordinates to render with highlight brackets.
    pub fn with_highlights<I>(mut self, positions: I) -> Self
    where
        I: IntoIterator<Item = IVec2>,
    {
        self.highlights.extend(positions);
        self
    }

    /// Annotates every cell with its `(x,y)` coordinate.
    pub fn with_coordinates(mut self) -> Self {
        self.show_coordinates = true;
        self
    }

    /// Renders the grid as a bordered table, one grid row per line.
    ///
    /// Highlighted cells are wrapped in `[` `]`, all others padded with
    /// spaces. An empty grid renders as a single empty border.
    pub fn render<T: std::fmt::Display>(&self, grid: &Grid<T>) -> String {
        let labels: Vec<String> = grid
            .cells()
            .iter()
            .map(|cell| {
                if self.show_coordinates {
                    let p = cell.position();
                    format!("({},{}) {}", p.x, p.y, cell.contents())
                } else {
                    cell.contents().to_string()
                }
            })
            .collect();
        let width = labels.iter().map(String::len).max().unwrap_or(0);

        let mut out = String::new();
        let border = format!("+{}+", "-".repeat((width + 3) * grid.columns().max(1)));
        out.push_str(&border);
        out.push('\n');
        for y in 0..grid.rows() {
            out.push('|');
            for x in 0..grid.columns() {
                let n = y * grid.columns() + x;
                let highlighted = self
                    .highlights
                    .contains(&IVec2::new(x as i32, y as i32));
                let (open, close) = if highlighted { ('[', ']') } else { (' ', ' ') };
                let _ = write!(out, "{open}{:>width$}{close}|", labels[n]);
            }
            out.push('\n');
        }
        out.push_str(&border);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;

    fn sample_grid() -> Grid<i32> {
        GridConfig::new()
            .with_items(1..=4)
            .with_columns(2)
            .build()
            .expect("2x2 grid")
    }

    #[test]
    fn renders_a_bordered_table() {
        let rendered = TextRenderer::new().render(&sample_grid());
        assert_eq!(rendered, "+--------+\n| 1 | 2 |\n| 3 | 4 |\n+--------+\n");
    }

    #[test]
    fn highlights_wrap_the_marked_cell() {
        let rendered = TextRenderer::new()
            .with_highlight(IVec2::new(1, 0))
            .render(&sample_grid());
        assert!(rendered.contains("[2]"));
        assert!(rendered.contains(" 1 "));
    }

    #[test]
    fn coordinate_annotations_use_cell_positions() {
        let rendered = TextRenderer::new()
            .with_coordinates()
            .render(&sample_grid());
        assert!(rendered.contains("(0,0) 1"));
        assert!(rendered.contains("(1,1) 4"));
    }

    #[test]
    fn empty_grids_render_borders_only() {
        let grid = GridConfig::<i32>::new()
            .with_rows(0)
            .with_columns(0)
            .build()
            .expect("empty grid");
        let rendered = TextRenderer::new().render(&grid);
        assert_eq!(rendered, "+---+\n+---+\n");
    }
}
