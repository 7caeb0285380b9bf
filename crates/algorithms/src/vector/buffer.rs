//! Buffer operations
//!
//! Offset polygon boundaries outward (positive distance) or inward
//! (negative distance) with mitred corners, so right angles stay square
//! instead of being rounded off.

use geo::algorithm::buffer::{BufferStyle, LineCap, LineJoin};
use geo::{Buffer, MultiPolygon, Polygon};

/// Smallest corner angle (radians) that still gets a sharp mitre.
///
/// `2 * asin(1 / 5)`: a mitre ratio of 5. Sharper corners are bevelled.
pub const MITRE_MIN_ANGLE: f64 = 0.402_715_841_580_661_6;

/// Parameters for buffer operations
#[derive(Debug, Clone)]
pub struct BufferParams {
    /// Buffer distance (positive = expand, negative = shrink)
    pub distance: f64,
    /// Minimum corner angle kept as a mitre (see [`MITRE_MIN_ANGLE`])
    pub mitre_min_angle: f64,
}

impl Default for BufferParams {
    fn default() -> Self {
        Self {
            distance: 1.0,
            mitre_min_angle: MITRE_MIN_ANGLE,
        }
    }
}

impl BufferParams {
    pub fn with_distance(distance: f64) -> Self {
        Self {
            distance,
            ..Self::default()
        }
    }

    fn style(&self) -> BufferStyle<f64> {
        BufferStyle::new(self.distance)
            .line_join(LineJoin::Miter(self.mitre_min_angle))
            .line_cap(LineCap::Butt)
    }
}

/// Buffer a single polygon.
///
/// A zero distance returns the polygon unchanged.
pub fn buffer_polygon(polygon: &Polygon<f64>, params: &BufferParams) -> MultiPolygon<f64> {
    if params.distance == 0.0 {
        return MultiPolygon::new(vec![polygon.clone()]);
    }
    polygon.buffer_with_style(params.style())
}

/// Buffer every part of a multipolygon at once.
///
/// A negative distance can split parts or remove them entirely.
pub fn buffer_multi_polygon(
    multi: &MultiPolygon<f64>,
    params: &BufferParams,
) -> MultiPolygon<f64> {
    if params.distance == 0.0 {
        return multi.clone();
    }
    multi.buffer_with_style(params.style())
}
