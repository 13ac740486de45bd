//! Cells and grid-backed cell handles.
//!
//! [`Cell`] is the plain record stored inside a grid: one user value plus the
//! coordinate and linear index of its slot. [`CellRef`] pairs a cell with a
//! reference to its owning grid so that relative lookups do not need the grid
//! passed back in.
use glam::IVec2;

use crate::grid::overflow::OverflowOverrides;
use crate::grid::Grid;

/// Immutable wrapper around one grid value and its location.
///
/// Cells are materialized during grid construction and never move afterwards.
/// A cell fed back into another grid via
/// [`GridItem::Cell`](crate::grid::GridItem) keeps its contents but is
/// re-anchored to the slot it lands in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell<T> {
    contents: T,
    position: IVec2,
    list_index: usize,
}

impl<T> Cell<T> {
    pub(crate) fn new(contents: T, position: IVec2, list_index: usize) -> Self {
        Self {
            contents,
            position,
            list_index,
        }
    }

    /// The wrapped value.
    pub fn contents(&self) -> &T {
        &self.contents
    }

    /// Consumes the cell, returning the wrapped value.
    pub fn into_contents(self) -> T {
        self.contents
    }

    /// The cell's coordinate within its grid, returned by value.
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// The cell's linear index into the grid's row-major storage,
    /// always `y * columns + x`.
    pub fn list_index(&self) -> usize {
        self.list_index
    }
}

/// A copyable handle to one cell of a [`Grid`].
///
/// This is the non-owning back-reference from cell to grid: the handle
/// borrows the grid, so cells can never outlive it. Dereferences to the
/// underlying [`Cell`].
#[derive(Debug)]
pub struct CellRef<'g, T> {
    grid: &'g Grid<T>,
    index: usize,
}

impl<'g, T> CellRef<'g, T> {
    pub(crate) fn new(grid: &'g Grid<T>, index: usize) -> Self {
        Self { grid, index }
    }

    /// The owning grid.
    pub fn grid(&self) -> &'g Grid<T> {
        self.grid
    }

    /// The underlying cell record.
    pub fn cell(&self) -> &'g Cell<T> {
        &self.grid.cells()[self.index]
    }

    /// Looks up the cell at `(dx, dy)` relative to this one, under the
    /// grid's configured overflow policies.
    pub fn relative(&self, dx: i32, dy: i32) -> Option<CellRef<'g, T>> {
        self.relative_with(dx, dy, OverflowOverrides::default())
    }

    /// Like [`relative`](Self::relative), with per-call overflow overrides.
    pub fn relative_with(
        &self,
        dx: i32,
        dy: i32,
        overrides: OverflowOverrides,
    ) -> Option<CellRef<'g, T>> {
        let p = self.cell().position();
        self.grid.cell_with(p.x + dx, p.y + dy, overrides)
    }
}

impl<T> Clone for CellRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellRef<'_, T> {}

impl<T> std::ops::Deref for CellRef<'_, T> {
    type Target = Cell<T>;

    fn deref(&self) -> &Self::Target {
        self.cell()
    }
}

/// Two handles are equal when they point at the same slot of the same grid.
impl<T> PartialEq for CellRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.grid, other.grid) && self.index == other.index
    }
}

impl<T> Eq for CellRef<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridConfig, Overflow};

    fn sample_grid() -> Grid<i32> {
        GridConfig::new()
            .with_items(1..=9)
            .with_columns(3)
            .build()
            .expect("3x3 grid")
    }

    #[test]
    fn deref_exposes_cell_accessors() {
        let grid = sample_grid();
        let cell = grid.cell(1, 2).expect("in range");
        assert_eq!(*cell.contents(), 8);
        assert_eq!(cell.position(), IVec2::new(1, 2));
        assert_eq!(cell.list_index(), 7);
    }

    #[test]
    fn relative_walks_the_owning_grid() {
        let grid = sample_grid();
        let origin = grid.cell(0, 0).expect("in range");
        let neighbor = origin.relative(2, 1).expect("in range");
        assert_eq!(*neighbor.contents(), 6);
        assert!(origin.relative(-1, 0).is_none());
    }

    #[test]
    fn relative_honors_overrides() {
        let grid = sample_grid();
        let origin = grid.cell(0, 0).expect("in range");
        let wrapped = origin
            .relative_with(-1, -1, OverflowOverrides::both(Overflow::Wrap))
            .expect("wraps to far corner");
        assert_eq!(*wrapped.contents(), 9);
    }

    #[test]
    fn handle_equality_is_per_slot_and_grid() {
        let grid = sample_grid();
        let other = sample_grid();
        assert_eq!(grid.cell(1, 1), grid.cell(1, 1));
        assert_ne!(grid.cell(1, 1), grid.cell(2, 1));
        assert_ne!(grid.cell(1, 1), other.cell(1, 1));
    }

    #[test]
    fn back_reference_reaches_the_owner() {
        let grid = sample_grid();
        let cell = grid.cell(2, 0).expect("in range");
        assert!(std::ptr::eq(cell.grid(), &grid));
    }
}
