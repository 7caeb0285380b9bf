use std::fmt;
use std::str::FromStr;

use topotile_core::{Error, Result};

use super::{MAX_GRID_SIZE, SHEET_HEIGHT, SHEET_WIDTH};

/// Grid sizes a 1:50k sheet can be subdivided into, in metres.
///
/// The grid size is the denominator of the nominal map scale, so a
/// `Scale5k` tile is a tenth of a sheet along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GridSize {
    Scale50k,
    Scale10k,
    Scale5k,
    Scale2k,
    Scale1k,
    Scale500,
}

impl GridSize {
    /// Every supported grid size, coarsest first
    pub const ALL: [GridSize; 6] = [
        GridSize::Scale50k,
        GridSize::Scale10k,
        GridSize::Scale5k,
        GridSize::Scale2k,
        GridSize::Scale1k,
        GridSize::Scale500,
    ];

    pub const fn meters(self) -> u32 {
        match self {
            GridSize::Scale50k => 50_000,
            GridSize::Scale10k => 10_000,
            GridSize::Scale5k => 5_000,
            GridSize::Scale2k => 2_000,
            GridSize::Scale1k => 1_000,
            GridSize::Scale500 => 500,
        }
    }

    pub fn from_meters(meters: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.meters() == meters)
    }

    /// Tile width in metres.
    ///
    /// Computed in integers: every supported size divides a sheet exactly.
    pub fn tile_width(self) -> f64 {
        f64::from(SHEET_WIDTH * self.meters() / MAX_GRID_SIZE)
    }

    /// Tile height in metres
    pub fn tile_height(self) -> f64 {
        f64::from(SHEET_HEIGHT * self.meters() / MAX_GRID_SIZE)
    }

    /// Number of tiles along each axis of a sheet
    pub const fn tiles_per_axis(self) -> u32 {
        MAX_GRID_SIZE / self.meters()
    }

    /// Width of the zero-padded row and column fields of a tile name.
    pub const fn digits(self) -> usize {
        match self {
            GridSize::Scale500 => 3,
            _ => 2,
        }
    }
}

impl TryFrom<u32> for GridSize {
    type Error = Error;

    fn try_from(meters: u32) -> Result<Self> {
        Self::from_meters(meters).ok_or_else(|| Error::InvalidParameter {
            name: "grid_size",
            value: meters.to_string(),
            reason: format!(
                "must be one of {}",
                Self::ALL.map(|g| g.meters().to_string()).join(", ")
            ),
        })
    }
}

impl FromStr for GridSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let meters: u32 = s.parse().map_err(|_| Error::InvalidParameter {
            name: "grid_size",
            value: s.to_string(),
            reason: "not an integer".into(),
        })?;
        Self::try_from(meters)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.meters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_dimensions() {
        let dims: Vec<(f64, f64, u32)> = GridSize::ALL
            .iter()
            .map(|g| (g.tile_width(), g.tile_height(), g.tiles_per_axis()))
            .collect();
        assert_eq!(
            dims,
            vec![
                (24000.0, 36000.0, 1),
                (4800.0, 7200.0, 5),
                (2400.0, 3600.0, 10),
                (960.0, 1440.0, 25),
                (480.0, 720.0, 50),
                (240.0, 360.0, 100),
            ]
        );
    }

    #[test]
    fn test_tiles_cover_sheet_exactly() {
        for g in GridSize::ALL {
            assert_eq!(g.tile_width() * f64::from(g.tiles_per_axis()), f64::from(SHEET_WIDTH));
            assert_eq!(g.tile_height() * f64::from(g.tiles_per_axis()), f64::from(SHEET_HEIGHT));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("500".parse::<GridSize>().unwrap(), GridSize::Scale500);
        assert_eq!(GridSize::try_from(10_000).unwrap(), GridSize::Scale10k);
        assert!("2500".parse::<GridSize>().is_err());
        assert!("abc".parse::<GridSize>().is_err());
    }

    #[test]
    fn test_display_matches_meters() {
        for g in GridSize::ALL {
            assert_eq!(g.to_string(), g.meters().to_string());
        }
    }

    #[test]
    fn test_digits() {
        assert_eq!(GridSize::Scale500.digits(), 3);
        assert_eq!(GridSize::Scale1k.digits(), 2);
    }
}
