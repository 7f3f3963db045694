//! Neighbour classification queries used by the update rules.
//!
//! Two primitives with deliberately different edge behaviour:
//! [`Grid::is_a`] is a direct check and is false off the grid, while
//! [`Grid::is_type_of`] clamps to the nearest edge cell so the world behaves
//! as if bounded by whatever already sits at its edge.

use crate::grid::Grid;
use crate::material::{Material, TagSet};

impl Grid {
    /// True iff `(c, r)` is in bounds and holds `material`.
    #[must_use]
    pub fn is_a(&self, c: i32, r: i32, material: Material) -> bool {
        self.get_checked(c, r) == Some(material)
    }

    /// True iff the material at the clamped coordinate shares a tag with `tags`.
    #[must_use]
    pub fn is_type_of(&self, c: i32, r: i32, tags: TagSet) -> bool {
        let c = c.clamp(0, self.cols() as i32 - 1);
        let r = r.clamp(0, self.rows() as i32 - 1);
        self.get(c, r).classify().intersects(tags)
    }

    #[must_use]
    pub fn is_air(&self, c: i32, r: i32) -> bool {
        self.is_a(c, r, Material::Air)
    }

    #[must_use]
    pub fn is_solid(&self, c: i32, r: i32) -> bool {
        self.is_type_of(c, r, TagSet::SOLID)
    }

    #[must_use]
    pub fn is_liquid(&self, c: i32, r: i32) -> bool {
        self.is_type_of(c, r, TagSet::LIQUID)
    }

    #[must_use]
    pub fn is_gas(&self, c: i32, r: i32) -> bool {
        self.is_type_of(c, r, TagSet::GAS)
    }
}
