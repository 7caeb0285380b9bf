//! Douglas-Peucker simplification for polygonal areas

use geo::{Area, LineString, MultiPolygon, Polygon, Simplify};

/// Parameters for simplification
#[derive(Debug, Clone)]
pub struct SimplifyParams {
    /// Maximum distance a removed vertex may lie from the simplified ring
    pub tolerance: f64,
}

impl Default for SimplifyParams {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

/// Simplify every ring of every part.
///
/// Rings that collapse below four coordinates or to zero area are
/// dropped. A part whose exterior collapses is dropped with its holes.
pub fn simplify_polygons(multi: &MultiPolygon<f64>, params: &SimplifyParams) -> MultiPolygon<f64> {
    if params.tolerance <= 0.0 {
        return multi.clone();
    }
    multi
        .iter()
        .filter_map(|polygon| simplify_polygon(polygon, params.tolerance))
        .collect()
}

fn simplify_polygon(polygon: &Polygon<f64>, tolerance: f64) -> Option<Polygon<f64>> {
    let exterior = simplify_ring(polygon.exterior(), tolerance)?;
    let interiors = polygon
        .interiors()
        .iter()
        .filter_map(|ring| simplify_ring(ring, tolerance))
        .collect();
    Some(Polygon::new(exterior, interiors))
}

fn simplify_ring(ring: &LineString<f64>, tolerance: f64) -> Option<LineString<f64>> {
    let simplified = ring.simplify(tolerance);
    let degenerate = simplified.0.len() < 4
        || Polygon::new(simplified.clone(), vec![]).unsigned_area() == 0.0;
    (!degenerate).then_some(simplified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    #[test]
    fn test_removes_near_collinear_vertices() {
        let square = polygon![
            (x: 0.0, y: 0.0), (x: 5.0, y: 0.001), (x: 10.0, y: 0.0),
            (x: 10.0, y: 10.0), (x: 0.0, y: 10.0), (x: 0.0, y: 0.0)
        ];
        let params = SimplifyParams { tolerance: 0.01 };
        let out = simplify_polygons(&MultiPolygon::new(vec![square]), &params);
        assert_eq!(out.0.len(), 1);
        assert_eq!(out.0[0].exterior().0.len(), 5);
    }

    #[test]
    fn test_drops_collapsed_parts_and_holes() {
        let with_tiny_hole = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]),
            vec![LineString::from(vec![(4.0, 4.0), (4.1, 4.0), (4.0, 4.1), (4.0, 4.0)])],
        );
        let sliver =
            polygon![(x: 20.0, y: 0.0), (x: 30.0, y: 0.0), (x: 30.0, y: 0.05), (x: 20.0, y: 0.0)];

        let out = simplify_polygons(
            &MultiPolygon::new(vec![with_tiny_hole, sliver]),
            &SimplifyParams { tolerance: 0.5 },
        );
        assert_eq!(out.0.len(), 1);
        assert!(out.0[0].interiors().is_empty());
    }

    #[test]
    fn test_zero_tolerance_is_identity() {
        let p = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)];
        let multi = MultiPolygon::new(vec![p]);
        assert_eq!(simplify_polygons(&multi, &SimplifyParams { tolerance: 0.0 }), multi);
    }
}
