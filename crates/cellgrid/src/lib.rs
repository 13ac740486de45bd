#![forbid(unsafe_code)]
//! cellgrid: rectangular grid views over flat sequences with per-axis
//! overflow policies.
//!
//! Modules:
//! - grid: construction, cells, and all coordinate-based queries
//! - render: console visualization of grids for debugging
//!
//! A grid is built once from a [`GridConfig`](crate::grid::GridConfig) and
//! read-only afterwards, so sharing it across threads needs nothing beyond
//! `T: Send + Sync`.
pub mod error;
pub mod grid;
pub mod render;

/// Convenient re-exports for common types. Import with `use cellgrid::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{
        Cell, CellRef, Filler, Grid, GridConfig, GridItem, Overflow, OverflowOverrides,
    };
    pub use crate::render::TextRenderer;
}
