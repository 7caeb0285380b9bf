use std::fmt;
use std::str::FromStr;

use topotile_core::{Error, Point, Result};

use super::{
    FIRST_SHEET_COL, LAST_SHEET_COL, LAST_SHEET_ROW, SHEET_HEIGHT, SHEET_ORIGIN_LEFT,
    SHEET_ORIGIN_TOP, SHEET_WIDTH,
};

/// Base-26 value of a sheet row letter pair, `AA` = 0.
const fn letter_pair_value(first: u8, second: u8) -> u32 {
    (first - b'A') as u32 * 26 + (second - b'A') as u32
}

/// Row letters of the northernmost sheet row.
const FIRST_ROW: u32 = letter_pair_value(b'A', b'S');

/// Row letter pairs the national sheet numbering never issued (`BI`,
/// `BO` and `CI`: the letters I and O were left out of the second
/// position to avoid confusion with 1 and 0). Sorted ascending.
const SKIPPED_ROWS: [u32; 3] = [
    letter_pair_value(b'B', b'I'),
    letter_pair_value(b'B', b'O'),
    letter_pair_value(b'C', b'I'),
];

/// A 1:50k mapsheet such as `CG10`, stored as zero-based grid row and column.
///
/// Only sheets of the reference grid exist: rows `AS` to `CJ`, columns
/// `04` to `45`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetCode {
    row: u32,
    col: u32,
}

impl SheetCode {
    /// Sheet at zero-based `row` (0 = `AS`) and `col`.
    pub fn new(row: u32, col: u32) -> Result<Self> {
        if row > LAST_SHEET_ROW || !(FIRST_SHEET_COL..=LAST_SHEET_COL).contains(&col) {
            return Err(Error::TileIndex(format!(
                "sheet row {row} column {col} is outside rows 0..={LAST_SHEET_ROW} \
                 and columns {FIRST_SHEET_COL}..={LAST_SHEET_COL}"
            )));
        }
        Ok(Self { row, col })
    }

    /// Zero-based row, counted southwards from `AS`
    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    /// Upper-left corner of the sheet.
    pub fn origin(&self) -> Point {
        Point::new(
            f64::from(SHEET_WIDTH) * f64::from(self.col) + f64::from(SHEET_ORIGIN_LEFT),
            f64::from(SHEET_ORIGIN_TOP) - f64::from(SHEET_HEIGHT) * f64::from(self.row),
        )
    }

    fn letter_value(&self) -> u32 {
        let mut value = FIRST_ROW + self.row;
        for skipped in SKIPPED_ROWS {
            if value >= skipped {
                value += 1;
            }
        }
        value
    }

    fn letters(&self) -> [char; 2] {
        let value = self.letter_value();
        [
            char::from(b'A' + (value / 26) as u8),
            char::from(b'A' + (value % 26) as u8),
        ]
    }
}

impl FromStr for SheetCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let &[first, second, tens, units] = code.as_bytes() else {
            return Err(Error::invalid_tile_name(
                code,
                "sheet code must be two letters followed by two digits",
            ));
        };
        if !first.is_ascii_uppercase() || !second.is_ascii_uppercase() {
            return Err(Error::invalid_tile_name(code, "sheet row must be two uppercase letters"));
        }
        if !tens.is_ascii_digit() || !units.is_ascii_digit() {
            return Err(Error::invalid_tile_name(code, "sheet column must be two digits"));
        }

        let value = letter_pair_value(first, second);
        if value < FIRST_ROW {
            return Err(Error::invalid_tile_name(code, "sheet rows start at AS"));
        }
        if SKIPPED_ROWS.contains(&value) {
            return Err(Error::invalid_tile_name(code, "sheet row is not part of the numbering"));
        }

        let skipped = SKIPPED_ROWS.iter().filter(|&&s| value > s).count() as u32;
        let row = value - FIRST_ROW - skipped;
        let col = u32::from(tens - b'0') * 10 + u32::from(units - b'0');
        if row > LAST_SHEET_ROW {
            return Err(Error::invalid_tile_name(code, "sheet rows end at CJ"));
        }
        if !(FIRST_SHEET_COL..=LAST_SHEET_COL).contains(&col) {
            return Err(Error::invalid_tile_name(
                code,
                format!("sheet column must be between {FIRST_SHEET_COL:02} and {LAST_SHEET_COL}"),
            ));
        }
        Ok(Self { row, col })
    }
}

impl fmt::Display for SheetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.letters();
        write!(f, "{first}{second}{:02}", self.col)
    }
}
