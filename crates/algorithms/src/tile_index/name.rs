use std::fmt;
use std::str::FromStr;

use topotile_core::{Bounds, Error, Point, Result};

use super::{reason, tile_offset, GridSize, SheetCode};

/// A parsed tile name, `<sheet>_<grid size>_<row><col>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileName {
    sheet: SheetCode,
    grid_size: GridSize,
    row: u32,
    col: u32,
}

impl TileName {
    pub fn new(sheet: SheetCode, grid_size: GridSize, row: u32, col: u32) -> Result<Self> {
        let tiles = grid_size.tiles_per_axis();
        if !(1..=tiles).contains(&row) || !(1..=tiles).contains(&col) {
            return Err(Error::TileIndex(format!(
                "row {row} column {col} is outside 1..={tiles} for grid size {grid_size}"
            )));
        }
        Ok(Self {
            sheet,
            grid_size,
            row,
            col,
        })
    }

    pub fn sheet(&self) -> SheetCode {
        self.sheet
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// 1-based row inside the sheet, counted southwards
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 1-based column inside the sheet, counted eastwards
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Absolute bounds of the tile.
    pub fn bounds(&self) -> Bounds {
        let origin = self.sheet.origin();
        let offset = tile_offset(self.grid_size, self.col, self.row);
        Bounds::new(
            Point::new(origin.x + offset.point.x, origin.y - offset.point.y),
            offset.size,
        )
    }
}

impl FromStr for TileName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let parts: Vec<&str> = name.split('_').collect();
        let &[sheet, grid_size, row_col] = parts.as_slice() else {
            return Err(Error::invalid_tile_name(
                name,
                format!("expected 3 parts separated by '_', found {}", parts.len()),
            ));
        };

        let sheet: SheetCode = sheet
            .parse()
            .map_err(|e| Error::invalid_tile_name(name, reason(e)))?;
        let grid_size: GridSize = grid_size.parse().map_err(|_| {
            Error::invalid_tile_name(
                name,
                format!("grid size must be one of {:?}", GridSize::ALL.map(GridSize::meters)),
            )
        })?;

        let digits = grid_size.digits();
        if row_col.len() != 2 * digits || !row_col.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_tile_name(
                name,
                format!("grid size {grid_size} needs a {}-digit row and column", 2 * digits),
            ));
        }
        let (row, col) = row_col.split_at(digits);
        let row: u32 = row.parse().map_err(|_| Error::invalid_tile_name(name, "bad row"))?;
        let col: u32 = col.parse().map_err(|_| Error::invalid_tile_name(name, "bad column"))?;

        TileName::new(sheet, grid_size, row, col)
            .map_err(|e| Error::invalid_tile_name(name, reason(e)))
    }
}

impl fmt::Display for TileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.grid_size.digits();
        write!(
            f,
            "{}_{}_{:0width$}{:0width$}",
            self.sheet, self.grid_size, self.row, self.col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_500() {
        let name: TileName = "CG10_500_080037".parse().unwrap();
        assert_eq!(name.grid_size(), GridSize::Scale500);
        assert_eq!((name.row(), name.col()), (80, 37));
        assert_eq!(name.sheet().to_string(), "CG10");
    }

    #[test]
    fn test_parse_two_digit_fields() {
        let name: TileName = "BQ31_1000_4019".parse().unwrap();
        assert_eq!((name.row(), name.col()), (40, 19));
        assert_eq!(name.to_string(), "BQ31_1000_4019");
    }

    #[test]
    fn test_display_pads_fields() {
        let sheet: SheetCode = "AS21".parse().unwrap();
        let name = TileName::new(sheet, GridSize::Scale500, 1, 9).unwrap();
        assert_eq!(name.to_string(), "AS21_500_001009");

        let name = TileName::new(sheet, GridSize::Scale5k, 3, 10).unwrap();
        assert_eq!(name.to_string(), "AS21_5000_0310");
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let bad = [
            "CG10_500",
            "CG10_500_080037_x",
            "CG10_2500_0101",
            "CG10_500_8037",
            "CG10_500_0800370",
            "CG10_1000_080037",
            "CG10_1000_4a19",
            "CG10_1000_+1+1",
            "CG1_1000_0101",
            "CG10_1000_0000",
            "CG10_1000_5101",
            "CG10_50000_0201",
        ];
        for name in bad {
            match name.parse::<TileName>() {
                Err(Error::InvalidTileName { name: reported, .. }) => assert_eq!(reported, name),
                other => panic!("{name}: expected InvalidTileName, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_tile_new_rejects_out_of_range() {
        let sheet: SheetCode = "CG10".parse().unwrap();
        assert!(TileName::new(sheet, GridSize::Scale500, 101, 1).is_err());
        assert!(TileName::new(sheet, GridSize::Scale500, 100, 100).is_ok());
    }
}
