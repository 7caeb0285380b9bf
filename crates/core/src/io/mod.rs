//! Reading footprints and writing capture-area documents

use geo::Polygon;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::vector::{polygons_from_geojson_str, Feature};

/// Multihash prefix for a sha2-256 digest: function code `0x12`, length `0x20`.
const SHA256_MULTIHASH_PREFIX: &str = "1220";

/// Size and checksum of a written file, as recorded on a STAC asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetInfo {
    #[serde(skip)]
    pub path: PathBuf,
    /// `file:size` in bytes
    #[serde(rename = "file:size")]
    pub size: u64,
    /// `file:checksum` as a hex-encoded sha2-256 multihash
    #[serde(rename = "file:checksum")]
    pub checksum: String,
}

impl AssetInfo {
    /// Describe an in-memory payload that is (or will be) stored at `path`.
    pub fn from_bytes(path: impl Into<PathBuf>, data: &[u8]) -> Self {
        Self {
            path: path.into(),
            size: data.len() as u64,
            checksum: multihash_sha256_hex(data),
        }
    }
}

/// Hex-encoded sha2-256 multihash of `data`.
pub fn multihash_sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    format!("{SHA256_MULTIHASH_PREFIX}{digest:x}")
}

/// Read every polygon from a GeoJSON footprint file.
pub fn read_footprints<P: AsRef<Path>>(path: P) -> Result<Vec<Polygon<f64>>> {
    let text = fs::read_to_string(path.as_ref())?;
    polygons_from_geojson_str(&text)
}

/// Write a feature as a GeoJSON file and describe the written asset.
pub fn write_feature<P: AsRef<Path>>(feature: &Feature, path: P) -> Result<AssetInfo> {
    let data = feature.to_geojson_string()?.into_bytes();
    fs::write(path.as_ref(), &data)?;
    Ok(AssetInfo::from_bytes(path.as_ref(), &data))
}
