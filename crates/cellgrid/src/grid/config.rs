//! Grid configuration and construction.
//!
//! [`GridConfig`] is the one entry point for building a [`Grid`]: it collects
//! the source items, optional dimensions, overflow policies, an optional
//! filler for uncovered slots, and an optional external identifier, then
//! materializes every cell eagerly in [`GridConfig::build`].
use std::time::{SystemTime, UNIX_EPOCH};

use glam::IVec2;
use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::cell::Cell;
use crate::grid::overflow::Overflow;
use crate::grid::Grid;

/// Produces contents for slots not covered by the source items.
/// Called with `(column, row, linear index)`.
pub type Filler<T> = Box<dyn Fn(usize, usize, usize) -> T>;

/// One source element for grid construction: either a plain value or a cell
/// taken from another grid.
///
/// A supplied cell keeps its contents but is re-anchored: the receiving slot
/// overwrites its position and list index, so the rectangularity invariants
/// hold no matter where the cell came from.
#[derive(Clone, Debug)]
pub enum GridItem<T> {
    Value(T),
    Cell(Cell<T>),
}

impl<T> GridItem<T> {
    fn into_contents(self) -> T {
        match self {
            GridItem::Value(value) => value,
            GridItem::Cell(cell) => cell.into_contents(),
        }
    }
}

impl<T> From<T> for GridItem<T> {
    fn from(value: T) -> Self {
        GridItem::Value(value)
    }
}

/// Configuration for building a [`Grid`].
///
/// Defaults: empty items, unset dimensions, [`Overflow::None`] on both axes,
/// no filler, auto-generated id. Per-axis overflow settings take precedence
/// over the shared [`with_overflow`](Self::with_overflow) shorthand.
pub struct GridConfig<T> {
    items: Vec<GridItem<T>>,
    rows: Option<usize>,
    columns: Option<usize>,
    overflow: Overflow,
    overflow_x: Option<Overflow>,
    overflow_y: Option<Overflow>,
    filler: Option<Filler<T>>,
    id: Option<String>,
}

impl<T> Default for GridConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridConfig<T> {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            rows: None,
            columns: None,
            overflow: Overflow::None,
            overflow_x: None,
            overflow_y: None,
            filler: None,
            id: None,
        }
    }

    /// Sets the source items from plain values.
    pub fn with_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items = items.into_iter().map(GridItem::Value).collect();
        self
    }

    /// Sets the source items from a mixed sequence of values and cells.
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = GridItem<T>>,
    {
        self.items = entries.into_iter().collect();
        self
    }

    /// Sets the row count.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Sets the column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Sets the overflow policy for both axes. Per-axis settings win.
    pub fn with_overflow(mut self, policy: Overflow) -> Self {
        self.overflow = policy;
        self
    }

    /// Sets the overflow policy for the X axis only.
    pub fn with_overflow_x(mut self, policy: Overflow) -> Self {
        self.overflow_x = Some(policy);
        self
    }

    /// Sets the overflow policy for the Y axis only.
    pub fn with_overflow_y(mut self, policy: Overflow) -> Self {
        self.overflow_y = Some(policy);
        self
    }

    /// Sets the filler called as `(column, row, index)` for every slot the
    /// source items do not cover.
    pub fn with_filler<F>(mut self, filler: F) -> Self
    where
        F: Fn(usize, usize, usize) -> T + 'static,
    {
        self.filler = Some(Box::new(filler));
        self
    }

    /// Sets an explicit grid identifier instead of the generated one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builds the grid, materializing all cells eagerly.
    ///
    /// Dimension inference, in priority order:
    /// 1. Both counts given: used as-is. Excess trailing items are clipped;
    ///    a shortfall must be covered by the filler.
    /// 2. Neither given: a single row holding all items.
    /// 3. Only `columns`: `rows = ceil(items / columns)`. Fails with
    ///    [`Error::AmbiguousDimensions`] when the items are empty.
    /// 4. Only `rows`: symmetric to 3.
    pub fn build(self) -> Result<Grid<T>> {
        let supplied = self.items.len();
        let (columns, rows) = match (self.columns, self.rows) {
            (Some(columns), Some(rows)) => (columns, rows),
            (None, None) => (supplied, 1),
            (Some(columns), None) => {
                if supplied == 0 {
                    return Err(Error::AmbiguousDimensions { axis: "columns" });
                }
                if columns == 0 {
                    return Err(Error::InvalidConfig(format!(
                        "a column count of 0 cannot hold {supplied} items"
                    )));
                }
                (columns, supplied.div_ceil(columns))
            }
            (None, Some(rows)) => {
                if supplied == 0 {
                    return Err(Error::AmbiguousDimensions { axis: "rows" });
                }
                if rows == 0 {
                    return Err(Error::InvalidConfig(format!(
                        "a row count of 0 cannot hold {supplied} items"
                    )));
                }
                (supplied.div_ceil(rows), rows)
            }
        };

        let capacity = columns * rows;
        let mut items = self.items;
        if supplied > capacity {
            debug!(
                "Clipping {} excess items to a capacity of {}.",
                supplied - capacity,
                capacity
            );
            items.truncate(capacity);
        }
        if items.len() < capacity && self.filler.is_none() {
            return Err(Error::InsufficientItems { supplied, capacity });
        }

        let mut cells = Vec::with_capacity(capacity);
        let mut source = items.into_iter();
        for n in 0..capacity {
            let x = n % columns;
            let y = n / columns;
            let contents = match (source.next(), &self.filler) {
                (Some(item), _) => item.into_contents(),
                (None, Some(filler)) => filler(x, y, n),
                (None, None) => {
                    return Err(Error::InsufficientItems { supplied, capacity });
                }
            };
            cells.push(Cell::new(contents, IVec2::new(x as i32, y as i32), n));
        }

        let id = self.id.unwrap_or_else(generate_id);
        debug!(
            "Constructed {}x{} grid '{}' with {} cells ({} filled).",
            columns,
            rows,
            id,
            capacity,
            capacity.saturating_sub(supplied)
        );

        Ok(Grid {
            columns,
            rows,
            overflow_x: self.overflow_x.unwrap_or(self.overflow),
            overflow_y: self.overflow_y.unwrap_or(self.overflow),
            id,
            cells,
        })
    }
}

/// Identifier from creation time plus a random component. Purely for
/// external identification; no effect on grid semantics.
fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("grid-{millis:x}-{:04x}", rand::random::<u16>())
}
