//! Capture area generation
//!
//! Merges per-image footprint polygons (longitude/latitude degrees) into
//! one polygonal area. Each footprint is dilated, the dilations are
//! unioned and the union is eroded by the same distance, so gaps and
//! overlaps narrower than about one pixel disappear while real holes in
//! the coverage survive. The result is simplified with the buffer
//! distance as tolerance and wrapped in a GeoJSON feature.

use geo::{Area, CoordsIter, Geometry, LineString, MultiPolygon, Polygon, Validation};
use tracing::{debug, warn};

use crate::maybe_rayon::*;
use crate::vector::{
    buffer_multi_polygon, buffer_polygon, dissolve, dissolve_multi, simplify_polygons,
    BufferParams, SimplifyParams,
};
use topotile_core::vector::polygonal_geometry;
use topotile_core::{Algorithm, Error, Feature, Result};

/// Approximate size of one metre in decimal degrees at New Zealand latitudes.
pub const DECIMAL_DEGREES_1M: f64 = 0.00001;

/// Parameters for capture area generation
#[derive(Debug, Clone)]
pub struct CaptureAreaParams {
    /// Ground sample distance of the source imagery, in metres
    pub gsd: f64,
}

impl Default for CaptureAreaParams {
    fn default() -> Self {
        Self { gsd: 1.0 }
    }
}

/// Buffer distance in decimal degrees for imagery with the given GSD.
pub fn buffer_distance_for_gsd(gsd: f64) -> Result<f64> {
    if !gsd.is_finite() || gsd <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "gsd",
            value: gsd.to_string(),
            reason: "must be a finite, positive number of metres".into(),
        });
    }
    Ok(DECIMAL_DEGREES_1M * gsd)
}

fn validate_footprints(polygons: &[Polygon<f64>]) -> Result<()> {
    for (index, polygon) in polygons.iter().enumerate() {
        let invalid = |reason: &str| Error::InvalidGeometry {
            index,
            reason: reason.to_string(),
        };

        if polygon
            .coords_iter()
            .any(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(invalid("non-finite coordinate"));
        }

        if !has_three_distinct_vertices(polygon.exterior()) {
            return Err(invalid("exterior ring has fewer than 3 distinct vertices"));
        }
        if polygon.unsigned_area() == 0.0 {
            return Err(invalid("polygon has zero area"));
        }
    }
    Ok(())
}

fn has_three_distinct_vertices(ring: &LineString<f64>) -> bool {
    let mut coords = ring.coords();
    let Some(&first) = coords.next() else {
        return false;
    };
    let Some(&second) = coords.find(|&&c| c != first) else {
        return false;
    };
    coords.any(|&c| c != first && c != second)
}

/// Merge footprints into one polygonal geometry.
///
/// Gaps narrower than `2 * buffer_distance` between footprints are closed.
/// A gap of exactly `2 * buffer_distance` closes too: the dilated
/// footprints touch and the union joins them. A `buffer_distance` of zero
/// is a plain union. A single part is returned
/// as a `Polygon`, several as a `MultiPolygon`.
pub fn merge_polygons(polygons: &[Polygon<f64>], buffer_distance: f64) -> Result<Geometry<f64>> {
    if polygons.is_empty() {
        return Err(Error::EmptyInput);
    }
    if !buffer_distance.is_finite() || buffer_distance < 0.0 {
        return Err(Error::InvalidParameter {
            name: "buffer_distance",
            value: buffer_distance.to_string(),
            reason: "must be a finite, non-negative number of degrees".into(),
        });
    }
    validate_footprints(polygons)?;

    debug!(
        "Merging {} polygons with buffer distance {}",
        polygons.len(),
        buffer_distance
    );

    let failed = |reason: String| Error::MergeFailed {
        polygons: polygons.len(),
        buffer_distance,
        reason,
    };

    let merged = if buffer_distance == 0.0 {
        dissolve(polygons)
    } else {
        close_gaps(polygons, buffer_distance)
    };
    if merged.0.is_empty() {
        return Err(failed("merged geometry is empty".into()));
    }

    let simplified = simplify_polygons(
        &merged,
        &SimplifyParams {
            tolerance: buffer_distance,
        },
    );

    let area = match simplified.check_validation() {
        Ok(()) if !simplified.0.is_empty() => simplified,
        outcome => {
            let reason = outcome
                .err()
                .map_or_else(|| "simplification removed every part".to_string(), |e| e.to_string());
            if let Err(e) = merged.check_validation() {
                return Err(failed(e.to_string()));
            }
            warn!(
                "Simplified capture area is invalid ({}), keeping the unsimplified geometry",
                reason
            );
            merged
        }
    };

    debug!("Capture area has {} parts", area.0.len());
    Ok(polygonal_geometry(area))
}

fn close_gaps(polygons: &[Polygon<f64>], buffer_distance: f64) -> MultiPolygon<f64> {
    let grow = BufferParams::with_distance(buffer_distance);
    let dilated: Vec<MultiPolygon<f64>> = polygons
        .into_par_iter()
        .map(|polygon| buffer_polygon(polygon, &grow))
        .collect();

    let union = dissolve_multi(&dilated);
    buffer_multi_polygon(&union, &BufferParams::with_distance(-buffer_distance))
}

/// Merge footprints captured at `gsd` metres into a capture area feature.
pub fn generate_capture_area(polygons: &[Polygon<f64>], gsd: f64) -> Result<Feature> {
    let buffer_distance = buffer_distance_for_gsd(gsd)?;
    let geometry = merge_polygons(polygons, buffer_distance)?;
    Ok(Feature::new(geometry))
}

/// Capture area algorithm
#[derive(Debug, Clone, Default)]
pub struct CaptureArea;

impl Algorithm for CaptureArea {
    type Input = Vec<Polygon<f64>>;
    type Output = Feature;
    type Params = CaptureAreaParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "CaptureArea"
    }

    fn description(&self) -> &'static str {
        "Merge image footprints into a single capture area, closing sub-pixel gaps"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        generate_capture_area(&input, params.gsd)
    }
}
