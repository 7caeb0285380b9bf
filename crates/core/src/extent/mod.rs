//! Planar extents in a projected coordinate system
//!
//! All values are metres. The y axis grows northwards, so a [`Bounds`]
//! hangs down and to the right of its upper-left origin.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in a projected coordinate system (metres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Largest absolute per-axis difference to `other`
    pub fn max_axis_distance(&self, other: &Point) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of an extent (metres, never negative).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative size {width}x{height}");
        Self { width, height }
    }
}

/// A rectangle anchored at its upper-left (north-west) corner.
///
/// The rectangle covers `origin.x..origin.x + width` horizontally and
/// `origin.y - height..origin.y` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub point: Point,
    pub size: Size,
}

impl Bounds {
    pub fn new(point: Point, size: Size) -> Self {
        Self { point, size }
    }

    pub fn min_x(&self) -> f64 {
        self.point.x
    }

    pub fn max_x(&self) -> f64 {
        self.point.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.point.y - self.size.height
    }

    pub fn max_y(&self) -> f64 {
        self.point.y
    }

    /// Crop window as `(min_x, min_y, max_x, max_y)`, the order GDAL's
    /// `-projwin`-style arguments are usually assembled from.
    pub fn crop_window(&self) -> (f64, f64, f64, f64) {
        (self.min_x(), self.min_y(), self.max_x(), self.max_y())
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "origin {} size {}x{}",
            self.point, self.size.width, self.size.height
        )
    }
}
