//! Material and classification types for the simulation grid.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use crate::error::Error;

/// Discriminant values are the material ids exposed to front ends and map
/// directly to the `r8uint` cell buffer; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, EnumCountMacro)]
pub enum Material {
    #[default]
    Air = 0,
    Sand = 1,
    Water = 2,
    Wood = 3,
    Stone = 4,
    Steam = 5,
    Acid = 6,
}

/// Movement-relevant behaviour a material can have.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter)]
pub enum Tag {
    Solid = 0,
    Liquid = 1,
    Gas = 2,
    Flammable = 3,
    Corrodible = 4,
}

/// A small bit-set of [`Tag`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TagSet(u8);

impl TagSet {
    pub const EMPTY: Self = Self(0);
    pub const SOLID: Self = Self::of(Tag::Solid);
    pub const LIQUID: Self = Self::of(Tag::Liquid);
    pub const GAS: Self = Self::of(Tag::Gas);
    pub const FLAMMABLE: Self = Self::of(Tag::Flammable);
    pub const CORRODIBLE: Self = Self::of(Tag::Corrodible);

    #[must_use]
    pub const fn of(tag: Tag) -> Self {
        Self(1 << tag as u8)
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, tag: Tag) -> bool {
        self.0 & Self::of(tag).0 != 0
    }

    /// True if the two sets share at least one tag.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Tag> {
        Tag::iter().filter(move |&tag| self.contains(tag))
    }
}

impl From<Tag> for TagSet {
    fn from(tag: Tag) -> Self {
        Self::of(tag)
    }
}

impl BitOr for TagSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for TagSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Static per-material metadata: classification plus what a renderer needs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MaterialInfo {
    pub name: &'static str,
    pub tags: TagSet,
    /// RGBA.
    pub color: [u8; 4],
    /// Single-character form used by the text rendering of a grid.
    pub glyph: char,
}

const TABLE: [MaterialInfo; Material::COUNT] = [
    MaterialInfo {
        name: "Air",
        tags: TagSet::EMPTY,
        color: [0, 0, 0, 1],
        glyph: '.',
    },
    MaterialInfo {
        name: "Sand",
        tags: TagSet::SOLID.union(TagSet::CORRODIBLE),
        color: [194, 178, 128, 255],
        glyph: 's',
    },
    MaterialInfo {
        name: "Water",
        tags: TagSet::LIQUID,
        color: [100, 100, 200, 150],
        glyph: '~',
    },
    MaterialInfo {
        name: "Wood",
        tags: TagSet::FLAMMABLE.union(TagSet::CORRODIBLE),
        color: [95, 60, 35, 255],
        glyph: 'w',
    },
    MaterialInfo {
        name: "Stone",
        tags: TagSet::SOLID.union(TagSet::CORRODIBLE),
        color: [80, 80, 80, 255],
        glyph: '#',
    },
    MaterialInfo {
        name: "Steam",
        tags: TagSet::GAS,
        color: [150, 150, 150, 125],
        glyph: '^',
    },
    // TODO: acid should corrode `CORRODIBLE` neighbours; for now it only flows.
    MaterialInfo {
        name: "Acid",
        tags: TagSet::LIQUID,
        color: [100, 170, 100, 255],
        glyph: 'a',
    },
];

impl Material {
    #[must_use]
    pub fn info(self) -> &'static MaterialInfo {
        &TABLE[self as usize]
    }

    /// The material's classification tags.
    #[must_use]
    pub fn classify(self) -> TagSet {
        self.info().tags
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    #[must_use]
    pub fn color(self) -> [u8; 4] {
        self.info().color
    }

    #[must_use]
    pub fn glyph(self) -> char {
        self.info().glyph
    }

    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::iter().find(|m| m.glyph() == glyph)
    }

    #[must_use]
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Material {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Error> {
        match id {
            0 => Ok(Self::Air),
            1 => Ok(Self::Sand),
            2 => Ok(Self::Water),
            3 => Ok(Self::Wood),
            4 => Ok(Self::Stone),
            5 => Ok(Self::Steam),
            6 => Ok(Self::Acid),
            _ => Err(Error::UnknownMaterial(id)),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
