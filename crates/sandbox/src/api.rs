//! Relative-offset API for material update rules.

use crate::dice::Dice;
use crate::grid::Grid;
use crate::material::Material;

/// A rule's view of the grid, centred on the cell being updated.
/// `dr = 1` is the row below, `dr = -1` the row above.
#[derive(Debug)]
pub struct SandApi<'a, D> {
    pub grid: &'a mut Grid,
    pub dice: &'a mut D,
    pub c: i32,
    pub r: i32,
}

impl<'a, D: Dice> SandApi<'a, D> {
    pub fn new(grid: &'a mut Grid, dice: &'a mut D, c: i32, r: i32) -> Self {
        Self { grid, dice, c, r }
    }

    /// The material of the cell being updated.
    #[must_use]
    pub fn me(&self) -> Material {
        self.grid.get(self.c, self.r)
    }

    #[must_use]
    pub fn is_a(&self, dc: i32, dr: i32, material: Material) -> bool {
        self.grid.is_a(self.c + dc, self.r + dr, material)
    }

    #[must_use]
    pub fn is_air(&self, dc: i32, dr: i32) -> bool {
        self.grid.is_air(self.c + dc, self.r + dr)
    }

    #[must_use]
    pub fn is_liquid(&self, dc: i32, dr: i32) -> bool {
        self.grid.is_liquid(self.c + dc, self.r + dr)
    }

    #[must_use]
    pub fn is_gas(&self, dc: i32, dr: i32) -> bool {
        self.grid.is_gas(self.c + dc, self.r + dr)
    }

    /// Swap this cell with the one at the offset. Off-grid targets are a no-op.
    pub fn swap(&mut self, dc: i32, dr: i32) {
        self.grid.swap(self.c, self.r, self.c + dc, self.r + dr);
    }

    pub fn sign(&mut self) -> i32 {
        self.dice.sign()
    }

    pub fn sign_or_zero(&mut self) -> i32 {
        self.dice.sign_or_zero()
    }
}
