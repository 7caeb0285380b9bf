//! # topotile Algorithms
//!
//! Tile grid addressing and capture-area generation.
//!
//! ## Modules
//!
//! - **tile_index**: convert between tile names and their bounds in the
//!   1:50k sheet grid, and check raster origins against their file names
//! - **capture_area**: merge image footprints into one capture area
//! - **vector**: buffer, dissolve and simplify polygonal areas

pub mod capture_area;
pub mod tile_index;
pub mod vector;

mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::capture_area::{
        buffer_distance_for_gsd, generate_capture_area, merge_polygons, CaptureArea,
        CaptureAreaParams, DECIMAL_DEGREES_1M,
    };
    pub use crate::tile_index::{
        check_tile_origin, check_tile_origins, get_bounds_from_name, get_mapsheet_offset,
        get_tile_name, get_tile_offset, GridSize, SheetCode, TileCheck, TileCheckOutcome,
        TileName,
    };
    pub use topotile_core::prelude::*;
}
