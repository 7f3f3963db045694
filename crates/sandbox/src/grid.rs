//! The 2D material grid and its single-cell primitives.

use std::fmt;

use strum::EnumCount;

use crate::error::{Error, Result};
use crate::material::Material;

/// Column-major coordinates `(c, r)` over row-major storage; row 0 is the top.
///
/// Reads require in-bounds coordinates, writes and swaps outside the grid
/// are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Material>,
}

impl Grid {
    /// Create an all-air grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero; use [`Grid::try_new`] for
    /// dimensions that come from outside the program.
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        assert!(cols > 0 && rows > 0, "grid dimensions must be positive");
        Self {
            cols,
            rows,
            cells: vec![Material::Air; cols * rows],
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the dimensions are rejected by
    /// [`Grid::check_dimensions`].
    pub fn try_new(cols: usize, rows: usize) -> Result<Self> {
        Self::check_dimensions(cols, rows)?;
        Ok(Self::new(cols, rows))
    }

    /// Both dimensions must be positive and addressable by `i32` coordinates,
    /// and the cell count must fit in `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] otherwise.
    pub fn check_dimensions(cols: usize, rows: usize) -> Result<()> {
        let max = i32::MAX as usize;
        if cols == 0 || rows == 0 || cols > max || rows > max || cols.checked_mul(rows).is_none() {
            return Err(Error::InvalidDimensions { cols, rows });
        }
        Ok(())
    }

    /// Parse a grid drawn with material glyphs, one text line per row.
    /// Leading/trailing whitespace and blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Fails on an unknown glyph, rows of differing length, or no rows.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        let mut grid = Self::try_new(cols, rows)?;

        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(Error::RaggedRows);
            }
            for (c, glyph) in line.chars().enumerate() {
                let material = Material::from_glyph(glyph).ok_or(Error::UnknownGlyph(glyph))?;
                grid.set(c as i32, r as i32, material);
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn cells(&self) -> &[Material] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, c: i32, r: i32) -> bool {
        c >= 0 && (c as usize) < self.cols && r >= 0 && (r as usize) < self.rows
    }

    fn index(&self, c: i32, r: i32) -> usize {
        r as usize * self.cols + c as usize
    }

    /// # Panics
    ///
    /// Panics if `(c, r)` is outside the grid. Check with [`Grid::in_bounds`]
    /// or use [`Grid::get_checked`].
    #[must_use]
    pub fn get(&self, c: i32, r: i32) -> Material {
        assert!(self.in_bounds(c, r), "cell ({c}, {r}) is outside the grid");
        self.cells[self.index(c, r)]
    }

    #[must_use]
    pub fn get_checked(&self, c: i32, r: i32) -> Option<Material> {
        self.in_bounds(c, r).then(|| self.cells[self.index(c, r)])
    }

    pub fn set(&mut self, c: i32, r: i32, material: Material) {
        if self.in_bounds(c, r) {
            let i = self.index(c, r);
            self.cells[i] = material;
        }
    }

    /// Exchange two cells. Does nothing unless both are in bounds.
    pub fn swap(&mut self, c1: i32, r1: i32, c2: i32, r2: i32) {
        if self.in_bounds(c1, r1) && self.in_bounds(c2, r2) {
            let a = self.index(c1, r1);
            let b = self.index(c2, r2);
            self.cells.swap(a, b);
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Material::Air);
    }

    #[must_use]
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|&&m| m == material).count()
    }

    /// Number of cells holding each material, indexed by material id.
    #[must_use]
    pub fn counts(&self) -> [usize; Material::COUNT] {
        let mut counts = [0; Material::COUNT];
        for &material in &self.cells {
            counts[material as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for material in row {
                write!(f, "{}", material.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_material() -> impl Strategy<Value = Material> {
        prop_oneof![
            Just(Material::Air),
            Just(Material::Sand),
            Just(Material::Water),
            Just(Material::Wood),
            Just(Material::Stone),
            Just(Material::Steam),
            Just(Material::Acid),
        ]
    }

    #[test]
    fn grid_new_initializes_all_air() {
        let grid = Grid::new(256, 128);
        assert_eq!(grid.cols(), 256);
        assert_eq!(grid.rows(), 128);
        assert_eq!(grid.cells().len(), 256 * 128);
        assert!(grid.cells().iter().all(|&m| m == Material::Air));
    }

    #[test]
    fn try_new_rejects_zero_dimensions() {
        assert!(matches!(
            Grid::try_new(0, 4),
            Err(Error::InvalidDimensions { cols: 0, rows: 4 })
        ));
        assert!(Grid::try_new(4, 0).is_err());
        assert!(Grid::try_new(1, 1).is_ok());
    }

    #[test]
    fn grid_get_set_in_bounds() {
        let mut grid = Grid::new(16, 16);
        grid.set(10, 3, Material::Sand);
        assert_eq!(grid.get(10, 3), Material::Sand);
        assert_eq!(grid.get_checked(10, 3), Some(Material::Sand));
    }

    #[test]
    fn grid_get_checked_out_of_bounds() {
        let grid = Grid::new(16, 16);
        assert_eq!(grid.get_checked(-1, 0), None);
        assert_eq!(grid.get_checked(16, 0), None);
        assert_eq!(grid.get_checked(0, 16), None);
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn grid_get_out_of_bounds_panics() {
        let grid = Grid::new(4, 4);
        let _ = grid.get(4, 0);
    }

    #[test]
    fn grid_in_bounds_checks() {
        let grid = Grid::new(256, 256);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(255, 255));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(256, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(0, 256));
    }

    #[test]
    fn paint_off_grid_is_noop() {
        let mut grid = Grid::new(8, 8);
        let before = grid.clone();
        grid.set(-1, -1, Material::Sand);
        grid.set(8, 0, Material::Sand);
        grid.set(0, 8, Material::Sand);
        assert_eq!(grid, before);
    }

    #[test]
    fn swap_exchanges_two_cells() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, Material::Sand);
        grid.set(2, 3, Material::Water);
        grid.swap(1, 1, 2, 3);
        assert_eq!(grid.get(1, 1), Material::Water);
        assert_eq!(grid.get(2, 3), Material::Sand);
    }

    #[test]
    fn swap_with_one_side_off_grid_is_noop() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 3, Material::Sand);
        let before = grid.clone();
        grid.swap(0, 3, -1, 3);
        grid.swap(0, 3, 0, 4);
        grid.swap(9, 9, 0, 3);
        assert_eq!(grid, before);
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        for (cols, rows) in [
            (usize::MAX / 2 + 1, 2),
            (usize::MAX, usize::MAX),
            (i32::MAX as usize + 1, 1),
            (1, i32::MAX as usize + 1),
        ] {
            assert!(matches!(
                Grid::try_new(cols, rows),
                Err(Error::InvalidDimensions { .. })
            ));
        }
        assert!(Grid::check_dimensions(i32::MAX as usize, 1).is_ok());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut grid = Grid::new(8, 8);
        grid.set(3, 3, Material::Stone);
        grid.set(4, 7, Material::Steam);
        grid.clear();
        let once = grid.clone();
        grid.clear();
        assert_eq!(grid, once);
        assert_eq!(grid.count(Material::Air), 64);
    }

    #[test]
    fn ascii_round_trip() {
        let text = "\
            ..s.
            ~~#^
            wa..";
        let grid = Grid::from_ascii(text).unwrap();
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.get(2, 0), Material::Sand);
        assert_eq!(grid.get(2, 1), Material::Stone);
        assert_eq!(grid.get(1, 2), Material::Acid);
        assert_eq!(grid.to_string(), "..s.\n~~#^\nwa..");
    }

    #[test]
    fn ascii_rejects_bad_input() {
        assert!(matches!(Grid::from_ascii("..\n..."), Err(Error::RaggedRows)));
        assert!(matches!(Grid::from_ascii(".x"), Err(Error::UnknownGlyph('x'))));
        assert!(matches!(
            Grid::from_ascii("  \n"),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn counts_by_material() {
        let grid = Grid::from_ascii("ss~\n#..").unwrap();
        let counts = grid.counts();
        assert_eq!(counts[Material::Sand as usize], 2);
        assert_eq!(counts[Material::Water as usize], 1);
        assert_eq!(counts[Material::Stone as usize], 1);
        assert_eq!(counts[Material::Air as usize], 2);
        assert_eq!(grid.count(Material::Sand), 2);
    }

    proptest! {
        #[test]
        fn prop_grid_in_bounds_get_set_round_trip(
            c in 0i32..64,
            r in 0i32..48,
            material in arb_material(),
        ) {
            let mut grid = Grid::new(64, 48);
            grid.set(c, r, material);
            prop_assert_eq!(grid.get(c, r), material);
        }
    }

    proptest! {
        #[test]
        fn prop_grid_out_of_bounds_set_leaves_grid_unchanged(
            c in prop_oneof![(-1000i32..0), (64i32..1000)],
            r in prop_oneof![(-1000i32..0), (48i32..1000)],
            material in arb_material(),
        ) {
            let mut grid = Grid::new(64, 48);
            let before = grid.clone();
            grid.set(c, r, material);
            prop_assert_eq!(grid, before);
        }
    }

    proptest! {
        #[test]
        fn prop_swap_conserves_counts(
            cells in proptest::collection::vec(arb_material(), 8 * 8),
            c1 in -2i32..10, r1 in -2i32..10,
            c2 in -2i32..10, r2 in -2i32..10,
        ) {
            let mut grid = Grid::new(8, 8);
            for (i, &m) in cells.iter().enumerate() {
                grid.set((i % 8) as i32, (i / 8) as i32, m);
            }
            let before = grid.counts();
            grid.swap(c1, r1, c2, r2);
            prop_assert_eq!(grid.counts(), before);
        }
    }
}
