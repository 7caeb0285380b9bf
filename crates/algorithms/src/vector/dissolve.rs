//! Merge overlapping and touching polygons into one polygonal area.

use geo::{unary_union, MultiPolygon, Polygon};

/// Union all polygons. Overlapping or touching inputs become one part;
/// disjoint inputs stay separate parts.
pub fn dissolve(polygons: &[Polygon<f64>]) -> MultiPolygon<f64> {
    unary_union(polygons.iter())
}

/// Union all parts of several multipolygons.
pub fn dissolve_multi(parts: &[MultiPolygon<f64>]) -> MultiPolygon<f64> {
    unary_union(parts.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{polygon, Area};

    fn rect(x0: f64, x1: f64) -> Polygon<f64> {
        polygon![
            (x: x0, y: 0.0), (x: x1, y: 0.0), (x: x1, y: 1.0), (x: x0, y: 1.0), (x: x0, y: 0.0)
        ]
    }

    #[test]
    fn test_dissolve_touching() {
        let merged = dissolve(&[rect(0.0, 1.0), rect(1.0, 2.0)]);
        assert_eq!(merged.0.len(), 1);
        assert_relative_eq!(merged.unsigned_area(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dissolve_overlapping() {
        let merged = dissolve(&[rect(0.0, 1.5), rect(1.0, 2.0)]);
        assert_eq!(merged.0.len(), 1);
        assert_relative_eq!(merged.unsigned_area(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dissolve_keeps_disjoint_parts() {
        let merged = dissolve(&[rect(0.0, 1.0), rect(3.0, 4.0)]);
        assert_eq!(merged.0.len(), 2);
    }

    #[test]
    fn test_dissolve_multi() {
        let merged = dissolve_multi(&[
            MultiPolygon::new(vec![rect(0.0, 1.0)]),
            MultiPolygon::new(vec![rect(0.5, 2.0), rect(5.0, 6.0)]),
        ]);
        assert_eq!(merged.0.len(), 2);
        assert_relative_eq!(merged.unsigned_area(), 3.0, epsilon = 1e-9);
    }
}
