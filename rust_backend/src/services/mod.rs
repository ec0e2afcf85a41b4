//! Derived views over a selection: the weekly grid and combination navigation.

pub mod browser;
pub mod grid;

pub use browser::{Position, ScheduleBrowser};
pub use grid::{
    render, slot_for, GridCell, GridError, GridResult, GridSlot, GridTable, GRID_COLUMNS,
    GRID_ROWS,
};
