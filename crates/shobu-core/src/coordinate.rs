//! Cell coordinates and move vectors inside a single quadrant.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width and height of every quadrant.
pub const GRID_SIZE: u8 = 4;

/// Errors produced by the coordinate codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("'{0}' is not a valid coordinate: expected a row A-D followed by a column 1-4")]
    Malformed(String),

    #[error("({row}, {col}) lies outside the 4x4 grid")]
    OutOfRange { row: i8, col: i8 },
}

/// A cell inside a quadrant.
///
/// Rows are lettered A-D from the top, columns numbered 1-4 from the left,
/// so `A1` is row 0, column 0 and `D4` is row 3, column 3.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Creates a coordinate, or `None` if either index is outside 0-3.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Coordinate { row, col })
        } else {
            None
        }
    }

    /// Creates a coordinate from signed indices.
    ///
    /// Move arithmetic can step off the grid; such results are reported as
    /// [`CoordinateError::OutOfRange`] instead of wrapping.
    pub fn try_new(row: i8, col: i8) -> Result<Self, CoordinateError> {
        let in_range = |v: i8| (0..GRID_SIZE as i8).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Coordinate {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(CoordinateError::OutOfRange { row, col })
        }
    }

    /// Creates a coordinate from its row-major index (0-15).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        Self::new(index / GRID_SIZE, index % GRID_SIZE)
    }

    /// Returns the row-major index (0-15).
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * GRID_SIZE + self.col) as usize
    }

    /// Returns the row (0 = A).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0 = 1).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Iterates over all 16 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> + Clone {
        (0..GRID_SIZE * GRID_SIZE).filter_map(Self::from_index)
    }

    /// Parses the two-character notation (e.g. `D4`).
    pub fn parse(text: &str) -> Result<Self, CoordinateError> {
        let malformed = || CoordinateError::Malformed(text.to_string());
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(malformed());
        }
        let row = match bytes[0] {
            b'A'..=b'D' => bytes[0] - b'A',
            _ => return Err(malformed()),
        };
        let col = match bytes[1] {
            b'1'..=b'4' => bytes[1] - b'1',
            _ => return Err(malformed()),
        };
        Ok(Coordinate { row, col })
    }

    /// Formats signed indices as notation, failing when they fall off the grid.
    pub fn format(row: i8, col: i8) -> Result<String, CoordinateError> {
        Self::try_new(row, col).map(Self::to_notation)
    }

    /// Returns the two-character notation for this coordinate.
    pub fn to_notation(self) -> String {
        let mut s = String::with_capacity(2);
        s.push((b'A' + self.row) as char);
        s.push((b'1' + self.col) as char);
        s
    }

    /// Follows `vector` from this coordinate.
    ///
    /// Vectors are stored as `start - end`, so `start.advance(Vector::between(start, end))`
    /// is `end`. Returns `None` when the result is off the grid.
    #[inline]
    pub fn advance(self, vector: Vector) -> Option<Self> {
        Self::try_new(
            self.row as i8 - vector.row,
            self.col as i8 - vector.col,
        )
        .ok()
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({})", self.to_notation())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A row/column displacement, derived as `start - end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub row: i8,
    pub col: i8,
}

impl Vector {
    /// The eight unit directions, clockwise from "up".
    pub const DIRECTIONS: [Vector; 8] = [
        Vector::new(1, 0),
        Vector::new(1, -1),
        Vector::new(0, -1),
        Vector::new(-1, -1),
        Vector::new(-1, 0),
        Vector::new(-1, 1),
        Vector::new(0, 1),
        Vector::new(1, 1),
    ];

    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Vector { row, col }
    }

    /// The vector taking `start` to `end`.
    #[inline]
    pub const fn between(start: Coordinate, end: Coordinate) -> Self {
        Vector {
            row: start.row as i8 - end.row as i8,
            col: start.col as i8 - end.col as i8,
        }
    }

    /// Chebyshev length: the number of king steps the vector spans.
    #[inline]
    pub const fn distance(self) -> u8 {
        let r = self.row.unsigned_abs();
        let c = self.col.unsigned_abs();
        if r > c {
            r
        } else {
            c
        }
    }

    /// Returns true for a non-zero horizontal, vertical or diagonal vector.
    #[inline]
    pub const fn is_line(self) -> bool {
        let r = self.row.unsigned_abs();
        let c = self.col.unsigned_abs();
        (r | c) != 0 && (r == 0 || c == 0 || r == c)
    }

    /// The one-step vector pointing the same way.
    #[inline]
    pub const fn unit(self) -> Self {
        Vector {
            row: self.row.signum(),
            col: self.col.signum(),
        }
    }

    /// This vector multiplied by `factor`.
    #[inline]
    pub const fn scaled(self, factor: i8) -> Self {
        Vector {
            row: self.row * factor,
            col: self.col * factor,
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(text: &str) -> Coordinate {
        Coordinate::parse(text).unwrap()
    }

    #[test]
    fn parse_corners() {
        assert_eq!(c("A1"), Coordinate::new(0, 0).unwrap());
        assert_eq!(c("D4"), Coordinate::new(3, 3).unwrap());
        assert_eq!(c("B3"), Coordinate::new(1, 2).unwrap());
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "A", "A0", "A5", "E1", "a1", "1A", "A11", " A1", "Ä1"] {
            assert!(
                matches!(Coordinate::parse(bad), Err(CoordinateError::Malformed(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn format_rejects_out_of_range() {
        assert_eq!(Coordinate::format(2, 3).unwrap(), "C4");
        assert_eq!(
            Coordinate::format(4, 0),
            Err(CoordinateError::OutOfRange { row: 4, col: 0 })
        );
        assert_eq!(
            Coordinate::format(0, -1),
            Err(CoordinateError::OutOfRange { row: 0, col: -1 })
        );
    }

    #[test]
    fn all_is_row_major() {
        let all: Vec<String> = Coordinate::all().map(Coordinate::to_notation).collect();
        assert_eq!(all.len(), 16);
        assert_eq!(&all[..5], ["A1", "A2", "A3", "A4", "B1"]);
        assert_eq!(all[15], "D4");
    }

    #[test]
    fn vector_between_is_start_minus_end() {
        let v = Vector::between(c("D4"), c("C4"));
        assert_eq!(v, Vector::new(1, 0));
        assert_eq!(c("D4").advance(v), Some(c("C4")));
        assert_eq!(c("A1").advance(v), None);
    }

    #[test]
    fn vector_geometry() {
        assert!(Vector::new(2, -2).is_line());
        assert!(Vector::new(0, 1).is_line());
        assert!(!Vector::new(0, 0).is_line());
        assert!(!Vector::new(2, 1).is_line());
        assert_eq!(Vector::new(2, -2).distance(), 2);
        assert_eq!(Vector::new(2, -2).unit(), Vector::new(1, -1));
        assert_eq!(Vector::new(0, 1).scaled(2), Vector::new(0, 2));
    }

    #[test]
    fn directions_are_distinct_units() {
        for (i, a) in Vector::DIRECTIONS.iter().enumerate() {
            assert!(a.is_line());
            assert_eq!(a.distance(), 1);
            for b in &Vector::DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    proptest! {
        #[test]
        fn notation_round_trips(row in 0u8..4, col in 0u8..4) {
            let coord = Coordinate::new(row, col).unwrap();
            let text = Coordinate::format(row as i8, col as i8).unwrap();
            prop_assert_eq!(Coordinate::parse(&text), Ok(coord));
        }

        #[test]
        fn format_agrees_with_bounds(row in -3i8..7, col in -3i8..7) {
            let in_grid = (0..4).contains(&row) && (0..4).contains(&col);
            prop_assert_eq!(Coordinate::format(row, col).is_ok(), in_grid);
        }

        #[test]
        fn advance_inverts_between(a in 0u8..16, b in 0u8..16) {
            let start = Coordinate::from_index(a).unwrap();
            let end = Coordinate::from_index(b).unwrap();
            prop_assert_eq!(start.advance(Vector::between(start, end)), Some(end));
        }
    }
}
