//! Error types for topotile

use thiserror::Error;

/// Main error type for topotile operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tile name (or one of its fields) does not follow `<sheet>_<grid size>_<row col>`.
    #[error("Invalid tile name '{name}': {reason}")]
    InvalidTileName { name: String, reason: String },

    /// A point or row/column index lies outside the reference grid.
    #[error("Tile index error: {0}")]
    TileIndex(String),

    #[error("No polygons supplied to the capture area merge")]
    EmptyInput,

    #[error("Invalid geometry at index {index}: {reason}")]
    InvalidGeometry { index: usize, reason: String },

    #[error("Merging {polygons} polygons with buffer distance {buffer_distance} failed: {reason}")]
    MergeFailed {
        polygons: usize,
        buffer_distance: f64,
        reason: String,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidTileName`].
    pub fn invalid_tile_name(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidTileName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for topotile operations
pub type Result<T> = std::result::Result<T, Error>;
