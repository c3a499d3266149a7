//! Cell contents.

use crate::Color;

/// What occupies a single cell of a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Stone {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Stone {
    /// Returns the color of the stone, or `None` for an empty cell.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Stone::Empty => None,
            Stone::Black => Some(Color::Black),
            Stone::White => Some(Color::White),
        }
    }

    /// Returns true if the cell holds no stone.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Stone::Empty)
    }

    /// Returns true if the cell holds a stone of `color`.
    #[inline]
    pub const fn is(self, color: Color) -> bool {
        matches!(
            (self, color),
            (Stone::Black, Color::Black) | (Stone::White, Color::White)
        )
    }

    /// Returns the board symbol: `O` for Black, `X` for White, `-` for empty.
    pub const fn symbol(self) -> char {
        match self {
            Stone::Empty => '-',
            Stone::Black => 'O',
            Stone::White => 'X',
        }
    }

    /// Parses a board symbol. Both `-` and `.` denote an empty cell.
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '-' | '.' => Some(Stone::Empty),
            'O' | 'o' => Some(Stone::Black),
            'X' | 'x' => Some(Stone::White),
            _ => None,
        }
    }
}

impl From<Color> for Stone {
    fn from(color: Color) -> Self {
        color.stone()
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stone_color() {
        assert_eq!(Stone::Empty.color(), None);
        assert_eq!(Stone::Black.color(), Some(Color::Black));
        assert_eq!(Stone::White.color(), Some(Color::White));
    }

    #[test]
    fn stone_is() {
        assert!(Stone::Black.is(Color::Black));
        assert!(!Stone::Black.is(Color::White));
        assert!(!Stone::Empty.is(Color::Black));
        assert!(!Stone::Empty.is(Color::White));
    }

    #[test]
    fn symbols() {
        assert_eq!(Stone::from_symbol('O'), Some(Stone::Black));
        assert_eq!(Stone::from_symbol('x'), Some(Stone::White));
        assert_eq!(Stone::from_symbol('.'), Some(Stone::Empty));
        assert_eq!(Stone::from_symbol('?'), None);
        for stone in [Stone::Empty, Stone::Black, Stone::White] {
            assert_eq!(Stone::from_symbol(stone.symbol()), Some(stone));
        }
    }
}
