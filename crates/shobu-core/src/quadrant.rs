//! The four boards of a Shobu game.

use crate::{Color, NotationError};
use std::fmt;
use std::str::FromStr;

/// One of the four independent 4x4 boards.
///
/// The left column holds the dark boards and the right column the light
/// boards. The top row belongs to White, the bottom row to Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BotLeft = 2,
    BotRight = 3,
}

/// Aggressive partners, indexed by quadrant. The order is the order in
/// which aggressive moves are enumerated.
const PARTNERS: [[Quadrant; 2]; 4] = [
    [Quadrant::BotRight, Quadrant::TopRight],
    [Quadrant::BotLeft, Quadrant::TopLeft],
    [Quadrant::BotRight, Quadrant::TopRight],
    [Quadrant::BotLeft, Quadrant::TopLeft],
];

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BotLeft,
        Quadrant::BotRight,
    ];

    /// Returns the index (0-3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a quadrant from its index (0-3).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Quadrant::TopLeft),
            1 => Some(Quadrant::TopRight),
            2 => Some(Quadrant::BotLeft),
            3 => Some(Quadrant::BotRight),
            _ => None,
        }
    }

    /// Returns the notation name (`topLeft`, `topRight`, `botLeft`, `botRight`).
    pub const fn name(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "topLeft",
            Quadrant::TopRight => "topRight",
            Quadrant::BotLeft => "botLeft",
            Quadrant::BotRight => "botRight",
        }
    }

    /// Looks up a quadrant by its notation name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.name() == name)
    }

    /// Returns the color whose home this quadrant is.
    #[inline]
    pub const fn owner(self) -> Color {
        match self {
            Quadrant::TopLeft | Quadrant::TopRight => Color::White,
            Quadrant::BotLeft | Quadrant::BotRight => Color::Black,
        }
    }

    /// Returns true if `color` plays passive moves here.
    #[inline]
    pub const fn is_home_of(self, color: Color) -> bool {
        self.owner() as u8 == color as u8
    }

    /// Returns the two quadrants where an aggressive move may follow a
    /// passive move played here: the two boards of the other shade.
    #[inline]
    pub const fn partners(self) -> [Quadrant; 2] {
        PARTNERS[self as usize]
    }

    /// Returns true if `other` is one of this quadrant's partners.
    pub fn pairs_with(self, other: Quadrant) -> bool {
        self.partners().contains(&other)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quadrant {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| NotationError::UnknownQuadrant(s.to_string()))
    }
}
