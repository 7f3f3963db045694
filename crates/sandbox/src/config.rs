//! Configuration for a simulation session.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::material::Material;

/// Grid size, random seed and per-material flow distances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of grid columns
    pub cols: usize,
    /// Number of grid rows
    pub rows: usize,
    /// Seed for the tie-breaking random source
    pub seed: u64,
    /// Cells water scans sideways per tick
    pub water_dispersion: u32,
    /// Cells acid scans sideways per tick
    pub acid_dispersion: u32,
    /// Cells steam scans sideways per tick
    pub steam_dispersion: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cols: 270,
            rows: 148,
            seed: 0,
            water_dispersion: 10,
            acid_dispersion: 5,
            steam_dispersion: 10,
        }
    }
}

impl SimConfig {
    /// Size the grid for a display of `width` × `height` pixels drawn with
    /// `scale` × `scale` pixel cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScale`] for a zero scale and
    /// [`Error::InvalidDimensions`] if the display is smaller than one cell.
    pub fn from_resolution(width: usize, height: usize, scale: usize) -> Result<Self> {
        if scale == 0 {
            return Err(Error::InvalidScale);
        }
        let config = Self {
            cols: width / scale,
            rows: height / scale,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or a config that does not validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Rejects dimensions [`Grid::check_dimensions`] refuses and dispersion
    /// distances outside `1..=i32::MAX`.
    pub fn validate(&self) -> Result<()> {
        Grid::check_dimensions(self.cols, self.rows)?;
        for (material, dispersion) in [
            (Material::Water, self.water_dispersion),
            (Material::Acid, self.acid_dispersion),
            (Material::Steam, self.steam_dispersion),
        ] {
            if dispersion == 0 || i32::try_from(dispersion).is_err() {
                return Err(Error::InvalidDispersion { material });
            }
        }
        Ok(())
    }
}
