//! Round trips between tile names and bounds across the whole sheet grid.

use topotile_algorithms::tile_index::{
    get_bounds_from_name, get_tile_name, GridSize, SheetCode, TileName,
};
use topotile_core::Point;

/// Sheet rows `AS` to `CJ` and columns 04 to 45 cover every valid origin.
const SHEET_ROWS: std::ops::RangeInclusive<u32> = 0..=40;
const SHEET_COLS: std::ops::RangeInclusive<u32> = 4..=45;

fn sample_indices(grid_size: GridSize) -> Vec<u32> {
    let last = grid_size.tiles_per_axis();
    let mut indices = vec![1, last / 2, last];
    indices.dedup();
    indices
}

#[test]
fn name_to_bounds_to_name_round_trips() {
    let mut checked = 0;
    for sheet_row in SHEET_ROWS.step_by(3) {
        for sheet_col in SHEET_COLS.step_by(5) {
            let sheet = SheetCode::new(sheet_row, sheet_col).unwrap();
            for grid_size in GridSize::ALL {
                for row in sample_indices(grid_size) {
                    for col in sample_indices(grid_size) {
                        let name = TileName::new(sheet, grid_size, row, col).unwrap().to_string();
                        let bounds = get_bounds_from_name(&name).unwrap();
                        let back = get_tile_name(bounds.point, grid_size).unwrap();
                        assert_eq!(back.to_string(), name);
                        checked += 1;
                    }
                }
            }
        }
    }
    assert!(checked > 1000);
}

#[test]
fn every_sheet_round_trips_at_base_scale() {
    for sheet_row in SHEET_ROWS {
        for sheet_col in SHEET_COLS {
            let sheet = SheetCode::new(sheet_row, sheet_col).unwrap();
            let name = format!("{sheet}_50000_0101");
            let bounds = get_bounds_from_name(&name).unwrap();
            assert_eq!(bounds.point, sheet.origin());
            assert_eq!(get_tile_name(bounds.point, GridSize::Scale50k).unwrap().to_string(), name);
        }
    }
}

#[test]
fn tiles_cover_their_sheet_exactly() {
    let sheet: SheetCode = "CG10".parse().unwrap();
    let origin = sheet.origin();
    for grid_size in GridSize::ALL {
        let last = grid_size.tiles_per_axis();
        let corner = TileName::new(sheet, grid_size, last, last).unwrap().bounds();
        assert_eq!(corner.max_x(), origin.x + 24_000.0, "{grid_size}");
        assert_eq!(corner.min_y(), origin.y - 36_000.0, "{grid_size}");
    }
}

#[test]
fn centre_of_tile_resolves_to_tile() {
    let bounds = get_bounds_from_name("BQ31_1000_2517").unwrap();
    let centre = Point::new(
        bounds.min_x() + bounds.size.width / 2.0,
        bounds.max_y() - bounds.size.height / 2.0,
    );
    assert_eq!(
        get_tile_name(centre, GridSize::Scale1k).unwrap().to_string(),
        "BQ31_1000_2517"
    );
}
