//! Tile grid addressing
//!
//! Maps tile names such as `CG10_500_080037` to their bounds in the
//! national transverse-mercator grid and back.
//!
//! A name has three parts:
//! - a 1:50k mapsheet code (`CG10`): two letters for the sheet row, two
//!   digits for the sheet column
//! - the grid size in metres, one of [`GridSize::ALL`]
//! - the tile row and column inside the sheet, 1-based and zero-padded to
//!   two digits each (three for the 500 grid, which has 100 tiles per axis)
//!
//! Rows grow southwards while northings grow northwards, so the y offset of
//! a tile is subtracted from its sheet's origin.

mod check;
mod grid_size;
mod name;
mod sheet;

pub use check::{
    check_tile_origin, check_tile_origins, TileCheck, TileCheckOutcome, ORIGIN_TOLERANCE,
};
pub use grid_size::GridSize;
pub use name::TileName;
pub use sheet::SheetCode;

use topotile_core::{Bounds, Error, Point, Result, Size};

/// Width of a 1:50k sheet in metres
pub const SHEET_WIDTH: u32 = 24_000;
/// Height of a 1:50k sheet in metres
pub const SHEET_HEIGHT: u32 = 36_000;
/// Left edge of sheet column 00
pub const SHEET_ORIGIN_LEFT: u32 = 988_000;
/// Top edge of sheet row `AS`
pub const SHEET_ORIGIN_TOP: u32 = 6_234_000;
/// Grid size of an unsubdivided 1:50k sheet
pub const MAX_GRID_SIZE: u32 = 50_000;

/// Smallest tile origin x covered by the reference grid (left edge of column 04)
pub const SHEET_MIN_X: u32 = 1_084_000;
/// Right edge of column 45; origins must lie strictly left of it
pub const SHEET_MAX_X: u32 = 2_092_000;
/// Bottom edge of row `CJ`; origins must lie strictly above it
pub const SHEET_MIN_Y: u32 = 4_758_000;
/// Largest tile origin y covered by the reference grid (top edge of row `AS`)
pub const SHEET_MAX_Y: u32 = 6_234_000;

/// First sheet column inside the reference grid (`04`)
const FIRST_SHEET_COL: u32 = (SHEET_MIN_X - SHEET_ORIGIN_LEFT) / SHEET_WIDTH;
/// Last sheet column inside the reference grid (`45`)
const LAST_SHEET_COL: u32 = (SHEET_MAX_X - SHEET_ORIGIN_LEFT) / SHEET_WIDTH - 1;
/// Last zero-based sheet row inside the reference grid (`CJ`)
const LAST_SHEET_ROW: u32 = (SHEET_ORIGIN_TOP - SHEET_MIN_Y) / SHEET_HEIGHT - 1;

/// Reason carried by a tile name error, without the name it was raised for.
fn reason(err: Error) -> String {
    match err {
        Error::InvalidTileName { reason, .. } | Error::TileIndex(reason) => reason,
        other => other.to_string(),
    }
}

/// Origin (upper-left corner) of a mapsheet such as `"CG10"`.
pub fn get_mapsheet_offset(sheet_code: &str) -> Result<Point> {
    Ok(sheet_code.parse::<SheetCode>()?.origin())
}

/// Bounds of tile (`x`, `y`) relative to its sheet's origin.
///
/// `x` is the 1-based column and `y` the 1-based row; the returned point
/// is the distance right of and below the sheet's upper-left corner.
pub fn get_tile_offset(grid_size: GridSize, x: u32, y: u32) -> Result<Bounds> {
    if x == 0 || y == 0 {
        return Err(Error::TileIndex(format!(
            "tile row and column are 1-based, got column {x} row {y}"
        )));
    }
    Ok(tile_offset(grid_size, x, y))
}

/// [`get_tile_offset`] for indices already known to be 1-based.
fn tile_offset(grid_size: GridSize, x: u32, y: u32) -> Bounds {
    let width = grid_size.tile_width();
    let height = grid_size.tile_height();
    Bounds::new(
        Point::new(
            f64::from(x.saturating_sub(1)) * width,
            f64::from(y.saturating_sub(1)) * height,
        ),
        Size::new(width, height),
    )
}

/// Absolute bounds of a named tile.
pub fn get_bounds_from_name(tile_name: &str) -> Result<Bounds> {
    Ok(tile_name.parse::<TileName>()?.bounds())
}

/// Name of the tile whose upper-left corner is `origin`.
///
/// Points inside a tile resolve to that tile; callers wanting to detect
/// misaligned rasters should compare `origin` against the bounds of the
/// returned name (see [`check_tile_origin`]).
pub fn get_tile_name(origin: Point, grid_size: GridSize) -> Result<TileName> {
    let (min_x, max_x) = (f64::from(SHEET_MIN_X), f64::from(SHEET_MAX_X));
    let (min_y, max_y) = (f64::from(SHEET_MIN_Y), f64::from(SHEET_MAX_Y));

    if !(min_x <= origin.x && origin.x < max_x) {
        return Err(Error::TileIndex(format!(
            "x must be between {SHEET_MIN_X} and {SHEET_MAX_X}, was {}",
            origin.x
        )));
    }
    if !(min_y < origin.y && origin.y <= max_y) {
        return Err(Error::TileIndex(format!(
            "y must be between {SHEET_MIN_Y} and {SHEET_MAX_Y}, was {}",
            origin.y
        )));
    }

    let sheet_col = ((origin.x - f64::from(SHEET_ORIGIN_LEFT)) / f64::from(SHEET_WIDTH)).floor();
    let sheet_row = ((f64::from(SHEET_ORIGIN_TOP) - origin.y) / f64::from(SHEET_HEIGHT)).floor();
    let sheet = SheetCode::new(sheet_row as u32, sheet_col as u32)?;

    let sheet_origin = sheet.origin();
    let col = ((origin.x - sheet_origin.x) / grid_size.tile_width()).floor() as u32 + 1;
    let row = ((sheet_origin.y - origin.y) / grid_size.tile_height()).floor() as u32 + 1;

    TileName::new(sheet, grid_size, row, col)
}
