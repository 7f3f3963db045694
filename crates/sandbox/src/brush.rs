//! Brushes for painting materials into the grid.
//!
//! A stroke joins the previous and current cursor cells with a straight
//! line so fast pointer motion leaves no gaps. Cells that land off the grid
//! are dropped by [`Grid::set`].

use crate::grid::Grid;
use crate::material::Material;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BrushShape {
    /// A single cell.
    #[default]
    Point,
    /// A filled square of side `2 * size - 1` centred on the cursor.
    Square,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Brush {
    pub shape: BrushShape,
    size: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(BrushShape::Point, 5)
    }
}

impl Brush {
    /// `size` is raised to 1 if zero.
    #[must_use]
    pub fn new(shape: BrushShape, size: u32) -> Self {
        Self {
            shape,
            size: size.max(1),
        }
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn grow(&mut self) {
        self.size = self.size.saturating_add(1);
    }

    pub fn shrink(&mut self) {
        self.size = self.size.saturating_sub(1).max(1);
    }

    pub fn next_shape(&mut self) {
        self.shape = BrushShape::Square;
    }

    pub fn prev_shape(&mut self) {
        self.shape = BrushShape::Point;
    }

    /// Cells the brush reaches from its centre along each axis.
    #[must_use]
    pub fn reach(&self) -> i32 {
        match self.shape {
            BrushShape::Point => 0,
            BrushShape::Square => i32::try_from(self.size - 1).unwrap_or(i32::MAX),
        }
    }

    /// Paint the brush centred on `(c, r)`, clipped to the grid.
    pub fn stamp(&self, grid: &mut Grid, c: i32, r: i32, material: Material) {
        let reach = i64::from(self.reach());
        let (c, r) = (i64::from(c), i64::from(r));
        let cols = (c - reach).max(0)..=(c + reach).min(grid.cols() as i64 - 1);
        let rows = (r - reach).max(0)..=(r + reach).min(grid.rows() as i64 - 1);
        for fr in rows {
            for fc in cols.clone() {
                grid.set(fc as i32, fr as i32, material);
            }
        }
    }

    /// Stamp at every cell on the line from `from` to `to`, both ends included.
    /// Only the part of the line within the brush's reach of the grid is walked.
    pub fn stroke(&self, grid: &mut Grid, from: (i32, i32), to: (i32, i32), material: Material) {
        let reach = i64::from(self.reach());
        let min = (-reach, -reach);
        let max = (grid.cols() as i64 - 1 + reach, grid.rows() as i64 - 1 + reach);
        for (c, r) in line(from, to).clip(min, max) {
            self.stamp(grid, c, r, material);
        }
    }
}

/// Cells on the straight line between two cells, inclusive of both.
///
/// Point `i` of `n + 1` sits at `from + round(i * delta / n)` on each axis,
/// so neighbouring points touch and each coordinate moves monotonically.
#[derive(Clone, Debug)]
pub struct Line {
    from: (i64, i64),
    delta: (i64, i64),
    steps: i64,
    next: i64,
    end: i64,
}

#[must_use]
pub fn line(from: (i32, i32), to: (i32, i32)) -> Line {
    let from = (i64::from(from.0), i64::from(from.1));
    let delta = (i64::from(to.0) - from.0, i64::from(to.1) - from.1);
    let steps = delta.0.abs().max(delta.1.abs());
    Line {
        from,
        delta,
        steps,
        next: 0,
        end: steps + 1,
    }
}

fn offset(i: i64, delta: i64, steps: i64) -> i64 {
    if steps == 0 {
        return 0;
    }
    let scaled = i128::from(i) * i128::from(delta);
    let steps = i128::from(steps);
    (2 * scaled + steps).div_euclid(2 * steps) as i64
}

impl Line {
    fn point(&self, i: i64) -> (i64, i64) {
        (
            self.from.0 + offset(i, self.delta.0, self.steps),
            self.from.1 + offset(i, self.delta.1, self.steps),
        )
    }

    /// Keep only the points inside the rectangle `min..=max`.
    #[must_use]
    pub fn clip(mut self, min: (i64, i64), max: (i64, i64)) -> Self {
        let (c_start, c_end) = self.span(|p| p.0, self.delta.0, min.0, max.0);
        let (r_start, r_end) = self.span(|p| p.1, self.delta.1, min.1, max.1);
        self.next = self.next.max(c_start).max(r_start);
        self.end = self.end.min(c_end).min(r_end);
        self
    }

    /// Index range over which one axis stays within `lo..=hi`.
    fn span(&self, axis: impl Fn((i64, i64)) -> i64, delta: i64, lo: i64, hi: i64) -> (i64, i64) {
        let at = |i| axis(self.point(i));
        if delta >= 0 {
            (self.first(|i| at(i) >= lo), self.first(|i| at(i) > hi))
        } else {
            (self.first(|i| at(i) <= hi), self.first(|i| at(i) < lo))
        }
    }

    /// Smallest index in `0..=steps + 1` where `pred` holds; `pred` must
    /// flip from false to true at most once.
    fn first(&self, pred: impl Fn(i64) -> bool) -> i64 {
        let (mut lo, mut hi) = (0, self.steps + 1);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if pred(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}

impl Iterator for Line {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.next >= self.end {
            return None;
        }
        let (c, r) = self.point(self.next);
        self.next += 1;
        Some((c as i32, r as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.end - self.next).max(0) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Line {}
