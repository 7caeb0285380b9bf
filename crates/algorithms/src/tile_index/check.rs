//! Checks that a raster's origin agrees with the tile name it is filed under

use std::fmt;
use std::path::{Path, PathBuf};

use topotile_core::Point;
use tracing::{info, warn};

use super::{get_tile_name, reason, GridSize, TileName};
use crate::maybe_rayon::*;

/// Largest per-axis distance (metres) between a raster origin and its
/// tile's corner that still counts as aligned.
pub const ORIGIN_TOLERANCE: f64 = 0.01;

/// What a tile origin check found.
#[derive(Debug, Clone, PartialEq)]
pub enum TileCheckOutcome {
    /// Name and origin agree.
    Aligned(TileName),
    /// The origin lies in a different tile than the file name says.
    Misnamed { expected: TileName, computed: TileName },
    /// Right tile, but the origin is not on the tile's corner.
    Misaligned {
        name: TileName,
        expected_origin: Point,
        origin: Point,
    },
    /// The origin is outside the reference grid.
    OutsideGrid(String),
    /// The file name is not a tile name.
    UnparsableName(String),
}

/// Result of checking one file.
#[derive(Debug, Clone, PartialEq)]
pub struct TileCheck {
    pub path: PathBuf,
    pub origin: Point,
    pub outcome: TileCheckOutcome,
}

impl TileCheck {
    pub fn is_aligned(&self) -> bool {
        matches!(self.outcome, TileCheckOutcome::Aligned(_))
    }
}

impl fmt::Display for TileCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.outcome {
            TileCheckOutcome::Aligned(name) => write!(f, "{path}: {name} ok"),
            TileCheckOutcome::Misnamed { expected, computed } => write!(
                f,
                "{path}: origin {} lies in {computed}, file is named {expected}",
                self.origin
            ),
            TileCheckOutcome::Misaligned {
                name,
                expected_origin,
                origin,
            } => write!(
                f,
                "{path}: origin {origin} is not aligned to {name}, expected {expected_origin}"
            ),
            TileCheckOutcome::OutsideGrid(reason) => {
                write!(f, "{path}: origin {} is outside the tile grid: {reason}", self.origin)
            }
            TileCheckOutcome::UnparsableName(reason) => {
                write!(f, "{path}: not a tile name: {reason}")
            }
        }
    }
}

/// Compare the tile implied by `origin` with the one named by `path`'s file stem.
pub fn check_tile_origin(path: &Path, origin: Point, grid_size: GridSize) -> TileCheck {
    TileCheck {
        path: path.to_path_buf(),
        origin,
        outcome: evaluate(path, origin, grid_size),
    }
}

fn evaluate(path: &Path, origin: Point, grid_size: GridSize) -> TileCheckOutcome {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let expected = match stem.parse::<TileName>() {
        Ok(name) => name,
        Err(e) => return TileCheckOutcome::UnparsableName(reason(e)),
    };
    let expected_origin = expected.bounds().point;
    let within_tolerance = origin.max_axis_distance(&expected_origin) <= ORIGIN_TOLERANCE;
    if expected.grid_size() == grid_size && within_tolerance {
        return TileCheckOutcome::Aligned(expected);
    }

    // Nudge into the tile so an origin a hair west or north of a corner
    // resolves to that corner's tile.
    let nudged = Point::new(origin.x + ORIGIN_TOLERANCE, origin.y - ORIGIN_TOLERANCE);
    let computed = match get_tile_name(nudged, grid_size) {
        Ok(name) => name,
        Err(e) => return TileCheckOutcome::OutsideGrid(reason(e)),
    };

    if expected != computed {
        return TileCheckOutcome::Misnamed { expected, computed };
    }
    TileCheckOutcome::Misaligned {
        name: expected,
        expected_origin,
        origin,
    }
}

/// Check a batch of `(path, origin)` pairs.
///
/// Every file gets a result; problems are logged one per file and never
/// stop the batch. Results keep the input order.
pub fn check_tile_origins(entries: &[(PathBuf, Point)], grid_size: GridSize) -> Vec<TileCheck> {
    let checks: Vec<TileCheck> = entries
        .into_par_iter()
        .map(|(path, origin)| check_tile_origin(path, *origin, grid_size))
        .collect();

    let mut problems = 0;
    for check in checks.iter().filter(|c| !c.is_aligned()) {
        warn!("{}", check);
        problems += 1;
    }
    info!(
        "Checked {} files at grid size {}: {} with problems",
        checks.len(),
        grid_size,
        problems
    );
    checks
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridSize = GridSize::Scale500;

    #[test]
    fn test_aligned() {
        let check = check_tile_origin(
            Path::new("/data/CG10_500_080037.tiff"),
            Point::new(1236640.0, 4837560.0),
            GRID,
        );
        assert!(check.is_aligned(), "{check}");
    }

    #[test]
    fn test_aligned_within_tolerance() {
        let check = check_tile_origin(
            Path::new("CG10_500_080037.tiff"),
            Point::new(1236640.004, 4837559.996),
            GRID,
        );
        assert!(check.is_aligned(), "{check}");
    }

    #[test]
    fn test_aligned_west_and_north_of_corner() {
        let path = Path::new("CG10_500_080037.tiff");
        for origin in [
            Point::new(1236639.996, 4837560.0),
            Point::new(1236640.0, 4837560.004),
            Point::new(1236639.9999999, 4837560.0000001),
        ] {
            let check = check_tile_origin(path, origin, GRID);
            assert!(check.is_aligned(), "{check}");
        }
    }

    #[test]
    fn test_just_beyond_tolerance_is_misaligned() {
        let check = check_tile_origin(
            Path::new("CG10_500_080037.tiff"),
            Point::new(1236640.02, 4837560.0),
            GRID,
        );
        assert!(
            matches!(check.outcome, TileCheckOutcome::Misaligned { .. }),
            "{check}"
        );
    }

    #[test]
    fn test_name_at_other_grid_size_is_misnamed() {
        let check = check_tile_origin(
            Path::new("CG10_1000_4019.tiff"),
            Point::new(1236640.0, 4837560.0),
            GRID,
        );
        assert!(matches!(check.outcome, TileCheckOutcome::Misnamed { .. }));
    }

    #[test]
    fn test_misnamed() {
        let check = check_tile_origin(
            Path::new("CG10_500_080038.tiff"),
            Point::new(1236640.0, 4837560.0),
            GRID,
        );
        match &check.outcome {
            TileCheckOutcome::Misnamed { expected, computed } => {
                assert_eq!(expected.to_string(), "CG10_500_080038");
                assert_eq!(computed.to_string(), "CG10_500_080037");
            }
            other => panic!("expected Misnamed, got {other:?}"),
        }
        let message = check.to_string();
        assert!(message.contains("CG10_500_080038.tiff"));
        assert!(message.contains("CG10_500_080037"));
    }

    #[test]
    fn test_misaligned() {
        let check = check_tile_origin(
            Path::new("CG10_500_080037.tiff"),
            Point::new(1236650.0, 4837550.0),
            GRID,
        );
        match check.outcome {
            TileCheckOutcome::Misaligned { expected_origin, .. } => {
                assert_eq!(expected_origin, Point::new(1236640.0, 4837560.0));
            }
            other => panic!("expected Misaligned, got {other:?}"),
        }
    }

    #[test]
    fn test_outside_grid() {
        let check = check_tile_origin(
            Path::new("CG10_500_080037.tiff"),
            Point::new(0.0, 0.0),
            GRID,
        );
        assert!(matches!(check.outcome, TileCheckOutcome::OutsideGrid(_)));
    }

    #[test]
    fn test_unparsable_name() {
        let check = check_tile_origin(
            Path::new("ortho_2023.tiff"),
            Point::new(1236640.0, 4837560.0),
            GRID,
        );
        assert!(matches!(check.outcome, TileCheckOutcome::UnparsableName(_)));
    }

    #[test]
    fn test_batch_keeps_order_and_continues_past_failures() {
        let entries = vec![
            (PathBuf::from("CG10_500_080037.tiff"), Point::new(1236640.0, 4837560.0)),
            (PathBuf::from("CG10_500_080037.tiff"), Point::new(0.0, 0.0)),
            (PathBuf::from("CG10_500_080038.tiff"), Point::new(1236880.0, 4837560.0)),
        ];
        let checks = check_tile_origins(&entries, GRID);

        assert_eq!(checks.len(), 3);
        assert!(checks[0].is_aligned());
        assert!(!checks[1].is_aligned());
        assert!(checks[2].is_aligned());
        assert_eq!(checks[1].origin, Point::new(0.0, 0.0));
    }
}
