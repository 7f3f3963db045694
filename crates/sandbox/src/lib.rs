//! Falling sand simulation engine.
//!
//! A 2D cellular automaton over a fixed grid of [`Material`]s. Each
//! [`Grid::tick`] applies per-material movement [`Rule`]s in two sweeps:
//! gravity-affected materials bottom-to-top, then buoyant ones top-to-bottom.
//! Every rule only swaps cells, so material counts never change on their own.
//!
//! [`Simulation`] bundles a grid with its rule table, random source and
//! pause state for a front end to drive; [`Universe`] exposes the same to
//! JavaScript.

pub mod api;
pub mod brush;
mod classify;
pub mod config;
pub mod dice;
pub mod error;
pub mod grid;
pub mod material;
pub mod rules;
mod schedule;
pub mod session;
pub mod universe;

pub use brush::{Brush, BrushShape};
pub use config::SimConfig;
pub use dice::{Dice, FixedDice, RngDice};
pub use error::{Error, Result};
pub use grid::Grid;
pub use material::{Material, MaterialInfo, Tag, TagSet};
pub use rules::{Rule, RuleTable, Sweep};
pub use session::Simulation;
pub use universe::Universe;

/// Create an all-air grid.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] if either dimension is zero.
pub fn create_grid(cols: usize, rows: usize) -> Result<Grid> {
    Grid::try_new(cols, rows)
}

/// Advance `grid` one tick with the default rule table.
pub fn tick<D: Dice>(grid: &mut Grid, dice: &mut D) {
    grid.tick(&RuleTable::default(), dice);
}

/// Set one cell; off-grid coordinates are ignored.
pub fn paint(grid: &mut Grid, c: i32, r: i32, material: Material) {
    grid.set(c, r, material);
}

/// Reset every cell to air.
pub fn clear(grid: &mut Grid) {
    grid.clear();
}

/// The classification tags of `material`.
#[must_use]
pub fn classify(material: Material) -> TagSet {
    material.classify()
}
