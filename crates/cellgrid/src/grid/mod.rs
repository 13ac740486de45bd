//! Rectangular grid views over flat row-major sequences.
//!
//! A [`Grid`] owns a fixed sequence of [`Cell`]s laid out row-major and
//! answers every coordinate-based query against it: single cells, rows,
//! columns, and rectangular areas, each resolving out-of-range coordinates
//! through the per-axis [`Overflow`] policies. Grids are immutable once
//! built; construction goes through [`GridConfig`].
pub mod cell;
pub mod config;
pub mod overflow;

pub use cell::{Cell, CellRef};
pub use config::{Filler, GridConfig, GridItem};
pub use overflow::{Overflow, OverflowOverrides};

use crate::grid::overflow::resolve_axis;

/// Fixed-size rectangular container of cells with row-major linear storage.
///
/// Index `n` holds the cell at `x = n % columns`, `y = n / columns`. Every
/// position in `[0, columns) x [0, rows)` has exactly one cell and the
/// storage is never resized or reordered after construction.
pub struct Grid<T> {
    columns: usize,
    rows: usize,
    overflow_x: Overflow,
    overflow_y: Overflow,
    id: String,
    cells: Vec<Cell<T>>,
}

impl<T> Grid<T> {
    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The configured X-axis overflow policy.
    pub fn overflow_x(&self) -> Overflow {
        self.overflow_x
    }

    /// The configured Y-axis overflow policy.
    pub fn overflow_y(&self) -> Overflow {
        self.overflow_y
    }

    /// External identifier assigned at construction.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell<T>] {
        &self.cells
    }

    /// Total number of cells, always `columns * rows`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for grids with a zero-sized axis.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates all cells as grid-backed handles, row-major.
    pub fn iter(&self) -> impl Iterator<Item = CellRef<'_, T>> {
        (0..self.cells.len()).map(move |index| CellRef::new(self, index))
    }

    /// Looks up the cell at `(x, y)` under the grid's overflow policies.
    ///
    /// A miss (out of range under [`Overflow::None`], or any lookup on a
    /// zero-sized axis) is `None`, never an error.
    pub fn cell(&self, x: i32, y: i32) -> Option<CellRef<'_, T>> {
        self.cell_with(x, y, OverflowOverrides::default())
    }

    /// Like [`cell`](Self::cell), with per-call overflow overrides. Each
    /// axis falls back to its own configured policy when not overridden.
    pub fn cell_with(&self, x: i32, y: i32, overrides: OverflowOverrides) -> Option<CellRef<'_, T>> {
        let (x, y) = self.resolve(x, y, overrides);
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(CellRef::new(self, y * self.columns + x))
    }

    /// The row at `index`, resolved under the Y-axis policy, in column order.
    pub fn row(&self, index: i32) -> Option<Vec<CellRef<'_, T>>> {
        self.row_with(index, OverflowOverrides::default())
    }

    /// Like [`row`](Self::row), with per-call overflow overrides.
    pub fn row_with(&self, index: i32, overrides: OverflowOverrides) -> Option<Vec<CellRef<'_, T>>> {
        let first = self.cell_with(0, index, overrides)?;
        let start = first.list_index();
        Some((start..start + self.columns).map(|n| CellRef::new(self, n)).collect())
    }

    /// The column at `index`, resolved under the X-axis policy, in row order.
    pub fn column(&self, index: i32) -> Option<Vec<CellRef<'_, T>>> {
        self.column_with(index, OverflowOverrides::default())
    }

    /// Like [`column`](Self::column), with per-call overflow overrides.
    pub fn column_with(
        &self,
        index: i32,
        overrides: OverflowOverrides,
    ) -> Option<Vec<CellRef<'_, T>>> {
        let first = self.cell_with(index, 0, overrides)?;
        let x = first.position().x as usize;
        Some(
            (0..self.rows)
                .map(|y| CellRef::new(self, y * self.columns + x))
                .collect(),
        )
    }

    /// The rectangular area anchored at `(x, y)` with signed extents, under
    /// the grid's overflow policies.
    pub fn area(&self, x: i32, y: i32, width: i32, height: i32) -> Option<Vec<CellRef<'_, T>>> {
        self.area_with(x, y, width, height, OverflowOverrides::default())
    }

    /// Like [`area`](Self::area), with per-call overflow overrides.
    ///
    /// `width` and `height` include the reference cell; negative extents
    /// grow left/up from `(x, y)` instead of right/down. The rectangle's
    /// top-left anchor is resolved first and the whole query is `None` when
    /// it misses. Cells are returned in row-major order from the anchor;
    /// offsets that miss under [`Overflow::None`] at an edge are skipped
    /// rather than failing the query. A zero extent yields an empty result.
    pub fn area_with(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        overrides: OverflowOverrides,
    ) -> Option<Vec<CellRef<'_, T>>> {
        let anchor_x = x + (width + 1).min(0);
        let anchor_y = y + (height + 1).min(0);
        let anchor = self.cell_with(anchor_x, anchor_y, overrides)?;

        let span_x = width.unsigned_abs();
        let span_y = height.unsigned_abs();
        let mut cells = Vec::with_capacity((span_x as usize) * (span_y as usize));
        for dy in 0..span_y {
            for dx in 0..span_x {
                if let Some(cell) = anchor.relative_with(dx as i32, dy as i32, overrides) {
                    cells.push(cell);
                }
            }
        }
        Some(cells)
    }

    /// Applies overrides (or the grid's policies) per axis. A coordinate may
    /// come back out of range under [`Overflow::None`]; callers bounds-check.
    fn resolve(&self, x: i32, y: i32, overrides: OverflowOverrides) -> (i32, i32) {
        (
            resolve_axis(overrides.x.unwrap_or(self.overflow_x), x, self.columns),
            resolve_axis(overrides.y.unwrap_or(self.overflow_y), y, self.rows),
        )
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("id", &self.id)
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("overflow_x", &self.overflow_x)
            .field("overflow_y", &self.overflow_y)
            .field("cells", &self.cells)
            .finish()
    }
}
