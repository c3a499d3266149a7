//! Move representation and `quadrant,start,end` notation.

use crate::{Color, Coordinate, CoordinateError, Quadrant, Vector};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when reading move notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected quadrant,start,end but got {0} field(s)")]
    WrongFieldCount(usize),

    #[error("expected a passive and an aggressive move but got {0} move(s)")]
    WrongMoveCount(usize),

    #[error("move notation contains an empty field")]
    EmptyField,

    #[error("'{0}' is not a quadrant: expected topLeft, topRight, botLeft or botRight")]
    UnknownQuadrant(String),

    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

/// Splits `quadrant,start,end` into its three trimmed fields.
pub fn split_fields(text: &str) -> Result<[&str; 3], NotationError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [quadrant, start, end] => {
            if fields.iter().any(|f| f.is_empty()) {
                return Err(NotationError::EmptyField);
            }
            Ok([*quadrant, *start, *end])
        }
        _ => Err(NotationError::WrongFieldCount(fields.len())),
    }
}

fn parse_parts(text: &str) -> Result<(Quadrant, Coordinate, Coordinate), NotationError> {
    let [quadrant, start, end] = split_fields(text)?;
    Ok((quadrant.parse()?, start.parse()?, end.parse()?))
}

/// A non-pushing move inside one of the mover's home quadrants.
///
/// Parsing only checks the notation; legality depends on the board and is
/// decided by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassiveMove {
    pub quadrant: Quadrant,
    pub start: Coordinate,
    pub end: Coordinate,
}

impl PassiveMove {
    #[inline]
    pub const fn new(quadrant: Quadrant, start: Coordinate, end: Coordinate) -> Self {
        PassiveMove {
            quadrant,
            start,
            end,
        }
    }

    /// The displacement every aggressive follow-up must repeat.
    #[inline]
    pub const fn vector(self) -> Vector {
        Vector::between(self.start, self.end)
    }

    /// The color that owns the quadrant, and therefore the only color that
    /// can play this move.
    #[inline]
    pub const fn color(self) -> Color {
        self.quadrant.owner()
    }

    /// Returns the notation (e.g. `botLeft,D4,C4`).
    pub fn to_notation(self) -> String {
        format!("{},{},{}", self.quadrant, self.start, self.end)
    }
}

impl fmt::Display for PassiveMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.quadrant, self.start, self.end)
    }
}

impl FromStr for PassiveMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (quadrant, start, end) = parse_parts(s)?;
        Ok(PassiveMove::new(quadrant, start, end))
    }
}

/// A possibly pushing move in a partner of the passive quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AggressiveMove {
    pub quadrant: Quadrant,
    pub start: Coordinate,
    pub end: Coordinate,
}

impl AggressiveMove {
    #[inline]
    pub const fn new(quadrant: Quadrant, start: Coordinate, end: Coordinate) -> Self {
        AggressiveMove {
            quadrant,
            start,
            end,
        }
    }

    #[inline]
    pub const fn vector(self) -> Vector {
        Vector::between(self.start, self.end)
    }

    /// Returns the notation (e.g. `topRight,A1,A2`).
    pub fn to_notation(self) -> String {
        format!("{},{},{}", self.quadrant, self.start, self.end)
    }
}

impl fmt::Display for AggressiveMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.quadrant, self.start, self.end)
    }
}

impl FromStr for AggressiveMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (quadrant, start, end) = parse_parts(s)?;
        Ok(AggressiveMove::new(quadrant, start, end))
    }
}

/// A complete turn: a passive move followed by an aggressive move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    pub passive: PassiveMove,
    pub aggressive: AggressiveMove,
}

impl Turn {
    #[inline]
    pub const fn new(passive: PassiveMove, aggressive: AggressiveMove) -> Self {
        Turn {
            passive,
            aggressive,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.passive.color()
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.passive, self.aggressive)
    }
}

impl FromStr for Turn {
    type Err = NotationError;

    /// Parses `passive aggressive`, the two moves separated by whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [passive, aggressive] => Ok(Turn::new(passive.parse()?, aggressive.parse()?)),
            _ => Err(NotationError::WrongMoveCount(parts.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(text: &str) -> Coordinate {
        Coordinate::parse(text).unwrap()
    }

    #[test]
    fn split_fields_trims() {
        assert_eq!(
            split_fields(" botLeft , D4,B2 ").unwrap(),
            ["botLeft", "D4", "B2"]
        );
    }

    #[test]
    fn split_fields_counts() {
        assert_eq!(
            split_fields("botLeft,D4"),
            Err(NotationError::WrongFieldCount(2))
        );
        assert_eq!(
            split_fields("botLeft,D4,C4,B4"),
            Err(NotationError::WrongFieldCount(4))
        );
        assert_eq!(split_fields("botLeft,,C4"), Err(NotationError::EmptyField));
    }

    #[test]
    fn passive_from_notation() {
        let m: PassiveMove = "botLeft,D4,B2".parse().unwrap();
        assert_eq!(m.quadrant, Quadrant::BotLeft);
        assert_eq!(m.start, c("D4"));
        assert_eq!(m.end, c("B2"));
        assert_eq!(m.vector(), Vector::new(2, 2));
        assert_eq!(m.color(), Color::Black);
        assert_eq!(m.to_notation(), "botLeft,D4,B2");
    }

    #[test]
    fn aggressive_from_notation() {
        let m: AggressiveMove = "topRight,A1,C1".parse().unwrap();
        assert_eq!(m.quadrant, Quadrant::TopRight);
        assert_eq!(m.vector(), Vector::new(-2, 0));
        assert_eq!(m.to_string(), "topRight,A1,C1");
    }

    #[test]
    fn notation_errors() {
        assert_eq!(
            "middle,A1,A2".parse::<PassiveMove>(),
            Err(NotationError::UnknownQuadrant("middle".to_string()))
        );
        assert!(matches!(
            "topLeft,A1,A9".parse::<PassiveMove>(),
            Err(NotationError::Coordinate(CoordinateError::Malformed(_)))
        ));
    }

    #[test]
    fn turn_notation() {
        let turn: Turn = "botLeft,D4,C4 topRight,D1,C1".parse().unwrap();
        assert_eq!(turn.color(), Color::Black);
        assert_eq!(turn.aggressive.quadrant, Quadrant::TopRight);
        assert_eq!(turn.to_string(), "botLeft,D4,C4 topRight,D1,C1");
        assert_eq!(
            "botLeft,D4,C4".parse::<Turn>(),
            Err(NotationError::WrongMoveCount(1))
        );
    }
}
