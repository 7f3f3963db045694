//! Error types for the simulation.

use thiserror::Error;

use crate::material::Material;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid grid dimensions {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("cell scale factor must be positive")]
    InvalidScale,

    #[error("dispersion distance for {material} must be positive and fit in an i32")]
    InvalidDispersion { material: Material },

    #[error("unknown material id {0}")]
    UnknownMaterial(u8),

    #[error("unknown material glyph {0:?}")]
    UnknownGlyph(char),

    #[error("grid rows have differing lengths")]
    RaggedRows,

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
