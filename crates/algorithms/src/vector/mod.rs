//! Vector operations on polygonal areas
//!
//! - Buffer: grow or shrink polygons with mitred corners
//! - Dissolve: union overlapping and touching polygons
//! - Simplify: Douglas-Peucker vertex reduction

mod buffer;
mod dissolve;
mod simplify;

pub use buffer::{buffer_multi_polygon, buffer_polygon, BufferParams, MITRE_MIN_ANGLE};
pub use dissolve::{dissolve, dissolve_multi};
pub use simplify::{simplify_polygons, SimplifyParams};
