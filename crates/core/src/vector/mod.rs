//! GeoJSON features
//!
//! A deliberately small GeoJSON layer: features carrying polygonal
//! geometries, which is all footprints and capture areas ever are.
//! Coordinates are written as `[x, y]` positions with no `crs` member,
//! so readers assume WGS84 longitude/latitude.

use geo::{Coord, Geometry, LineString, MultiPolygon, Polygon};
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// A GeoJSON feature carrying one polygonal geometry and no properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry<f64>,
}

impl Feature {
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self { geometry }
    }

    /// Serialize to a GeoJSON string.
    pub fn to_geojson_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let geometry = GeometryObject::try_from(&self.geometry).map_err(S::Error::custom)?;

        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "Feature")?;
        map.serialize_entry("geometry", &geometry)?;
        map.serialize_entry("properties", &serde_json::Map::new())?;
        map.end()
    }
}

type Position = Vec<f64>;
type Ring = Vec<Position>;

/// Polygonal GeoJSON geometry object.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
enum GeometryObject {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

impl TryFrom<&Geometry<f64>> for GeometryObject {
    type Error = Error;

    fn try_from(geometry: &Geometry<f64>) -> Result<Self> {
        match geometry {
            Geometry::Polygon(p) => Ok(GeometryObject::Polygon {
                coordinates: polygon_rings(p),
            }),
            Geometry::MultiPolygon(mp) => Ok(GeometryObject::MultiPolygon {
                coordinates: mp.iter().map(polygon_rings).collect(),
            }),
            other => Err(Error::UnsupportedGeometry(format!(
                "cannot write {} as a polygonal feature",
                geometry_kind(other)
            ))),
        }
    }
}

fn polygon_rings(polygon: &Polygon<f64>) -> Vec<Ring> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|ring| ring.coords().map(|c| vec![c.x, c.y]).collect())
        .collect()
}

fn ring_from_positions(positions: &[Position]) -> Result<LineString<f64>> {
    positions
        .iter()
        .map(|p| match p.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(Error::UnsupportedGeometry(format!(
                "position needs at least two ordinates, got {}",
                p.len()
            ))),
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}

fn polygon_from_rings(rings: &[Ring]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|r| ring_from_positions(r));
    let exterior = rings
        .next()
        .transpose()?
        .ok_or_else(|| Error::UnsupportedGeometry("polygon without exterior ring".into()))?;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Extract every polygon from a GeoJSON document.
///
/// Accepts a `FeatureCollection`, a `Feature` or a bare `Polygon` /
/// `MultiPolygon` geometry. Multipolygons are flattened into their parts and
/// features with a `null` geometry contribute nothing.
pub fn polygons_from_geojson(document: &Value) -> Result<Vec<Polygon<f64>>> {
    let kind = document
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::UnsupportedGeometry("GeoJSON object without a type".into()))?;

    match kind {
        "FeatureCollection" => {
            let features = document
                .get("features")
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    Error::UnsupportedGeometry("FeatureCollection without features".into())
                })?;
            let mut polygons = Vec::new();
            for feature in features {
                polygons.extend(polygons_from_geojson(feature)?);
            }
            Ok(polygons)
        }
        "Feature" => match document.get("geometry") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(geometry) => polygons_from_geojson(geometry),
        },
        "Polygon" | "MultiPolygon" => {
            match GeometryObject::deserialize(document)? {
                GeometryObject::Polygon { coordinates } => {
                    Ok(vec![polygon_from_rings(&coordinates)?])
                }
                GeometryObject::MultiPolygon { coordinates } => coordinates
                    .iter()
                    .map(|rings| polygon_from_rings(rings))
                    .collect(),
            }
        }
        other => Err(Error::UnsupportedGeometry(format!(
            "expected polygonal GeoJSON, found {other}"
        ))),
    }
}

/// Parse a GeoJSON string and return its polygons (see [`polygons_from_geojson`]).
pub fn polygons_from_geojson_str(text: &str) -> Result<Vec<Polygon<f64>>> {
    let document: Value = serde_json::from_str(text)?;
    polygons_from_geojson(&document)
}

/// Wrap polygons in a single geometry: one polygon stays a `Polygon`,
/// anything else becomes a `MultiPolygon`.
pub fn polygonal_geometry(multi: MultiPolygon<f64>) -> Geometry<f64> {
    if multi.0.len() == 1 {
        let mut parts = multi.0;
        Geometry::Polygon(parts.remove(0))
    } else {
        Geometry::MultiPolygon(multi)
    }
}
