//! Flat single-line text format for [`Grid`].
//!
//! ## Format
//!
//! ```text
//! <height>,<width>,<srcRow>,<srcCol>,<dstRow>,<dstCol>|<cells>|<weights>
//! ```
//!
//! `<cells>` holds `height*width` cell characters in row-major order (see
//! [`CellKind::symbol`]). `<weights>` holds the same number of integer
//! weights, each followed by a space.
//!
//! [`Grid::serialize`] writes presentation markers as empty cells.
//! [`Grid::load`] accepts them, validates the whole input first, and leaves
//! the grid untouched when anything is wrong.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Point, Range};

use crate::cell::CellKind;
use crate::grid::{DEFAULT_WEIGHT, Grid};

impl Grid {
    /// Encode the grid in the flat text format.
    ///
    /// The diagonal flag is not part of the format.
    pub fn serialize(&self) -> String {
        let mut out = format!(
            "{},{},{},{},{},{}|",
            self.height(),
            self.width(),
            self.source.y,
            self.source.x,
            self.destination.y,
            self.destination.x
        );
        out.extend(self.cells.iter().map(|c| {
            if c.is_marker() {
                CellKind::Empty.symbol()
            } else {
                c.symbol()
            }
        }));
        out.push('|');
        for w in &self.weights {
            out.push_str(&w.to_string());
            out.push(' ');
        }
        out
    }

    /// Replace this grid with the one encoded in `data`.
    ///
    /// On error the grid is left exactly as it was. The diagonal flag is kept
    /// from `self`.
    pub fn load(&mut self, data: &str) -> Result<(), GridError> {
        match Self::parse(data) {
            Ok(parsed) => {
                log::debug!(
                    "loaded {}x{} grid, source {} destination {}",
                    parsed.width(),
                    parsed.height(),
                    parsed.source,
                    parsed.destination
                );
                *self = Grid {
                    diagonals: self.diagonals,
                    ..parsed
                };
                Ok(())
            }
            Err(e) => {
                log::warn!("rejected grid data: {e}");
                Err(e)
            }
        }
    }

    /// Decode a grid from the flat text format. Diagonals start disabled.
    pub fn parse(data: &str) -> Result<Self, GridError> {
        let separators = data.matches('|').count();
        if separators != 2 {
            return Err(GridError::Separators(separators));
        }
        let mut sections = data.splitn(3, '|');
        let (Some(header), Some(map), Some(weights)) =
            (sections.next(), sections.next(), sections.next())
        else {
            return Err(GridError::Separators(separators));
        };

        let fields = header
            .split(',')
            .map(|f| f.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| GridError::Header(header.to_string()))?;
        let [height, width, src_row, src_col, dst_row, dst_col] = fields[..] else {
            return Err(GridError::Header(header.to_string()));
        };

        if width < 1 || height < 1 {
            return Err(GridError::Dimensions { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::Dimensions { width, height })?;

        let source = Point::new(src_col, src_row);
        let destination = Point::new(dst_col, dst_row);
        if !bounds.contains(source) {
            return Err(GridError::OutOfBounds {
                what: "source",
                pos: source,
            });
        }
        if !bounds.contains(destination) {
            return Err(GridError::OutOfBounds {
                what: "destination",
                pos: destination,
            });
        }

        // Checked before allocating anything sized by the header.
        let found = map.chars().take(len).count();
        if found < len {
            return Err(GridError::MapTooShort {
                expected: len,
                found,
            });
        }

        let mut cells = Vec::with_capacity(len);
        for (pos, ch) in bounds.iter().zip(map.chars()) {
            let kind = CellKind::from_symbol(ch).ok_or(GridError::InvalidCell { ch, pos })?;
            // The header decides where the endpoints are.
            cells.push(if kind.is_endpoint() {
                CellKind::Empty
            } else {
                kind
            });
        }

        let mut parsed_weights = vec![DEFAULT_WEIGHT; len];
        for (index, token) in weights.split_whitespace().take(len).enumerate() {
            match token.parse::<u32>() {
                Ok(w) if w >= DEFAULT_WEIGHT => parsed_weights[index] = w,
                _ => {
                    return Err(GridError::InvalidWeight {
                        token: token.to_string(),
                        index,
                    });
                }
            }
        }

        let mut grid = Grid {
            bounds,
            cells,
            weights: parsed_weights,
            source,
            destination,
            diagonals: false,
        };
        grid.stamp_endpoints();
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors that can occur when decoding a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input does not have exactly two `|` separators.
    Separators(usize),
    /// The header is not six comma-separated integers.
    Header(String),
    /// Width or height is below 1 (or too large to address).
    Dimensions { width: i32, height: i32 },
    /// The source or destination lies outside the grid.
    OutOfBounds { what: &'static str, pos: Point },
    /// The cell section has fewer than `height*width` characters.
    MapTooShort { expected: usize, found: usize },
    /// A character that is not a cell symbol.
    InvalidCell { ch: char, pos: Point },
    /// A weight that is not an integer ≥ 1.
    InvalidWeight { token: String, index: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separators(n) => write!(f, "grid: expected 2 section separators, found {n}"),
            Self::Header(h) => write!(f, "grid: malformed header \u{201c}{h}\u{201d}"),
            Self::Dimensions { width, height } => {
                write!(f, "grid: invalid dimensions {width}x{height}")
            }
            Self::OutOfBounds { what, pos } => write!(f, "grid: {what} {pos} is out of bounds"),
            Self::MapTooShort { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
            Self::InvalidCell { ch, pos } => {
                write!(f, "grid: invalid cell \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidWeight { token, index } => {
                write!(f, "grid: invalid weight \u{201c}{token}\u{201d} for cell {index}")
            }
        }
    }
}

impl std::error::Error for GridError {}
