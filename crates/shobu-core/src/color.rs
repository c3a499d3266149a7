//! Player color representation.

use crate::{Quadrant, Stone};

/// Represents the two players in Shobu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// Both colors, in turn order (Black moves first).
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the index (0 for Black, 1 for White).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the stone this color places on the board.
    #[inline]
    pub const fn stone(self) -> Stone {
        match self {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }

    /// Returns the two quadrants where this color plays passive moves.
    ///
    /// Black sits at the bottom of the board, White at the top.
    #[inline]
    pub const fn home_quadrants(self) -> [Quadrant; 2] {
        match self {
            Color::Black => [Quadrant::BotLeft, Quadrant::BotRight],
            Color::White => [Quadrant::TopLeft, Quadrant::TopRight],
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}
