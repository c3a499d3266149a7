//! Board representation: four independent 4x4 grids.

use shobu_core::{Color, Coordinate, Quadrant, Stone, GRID_SIZE};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when reading a board layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 4 grids, got {0}")]
    WrongGridCount(usize),

    #[error("expected 4 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 4")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell symbol '{0}': expected O, X, - or .")]
    InvalidSymbol(char),
}

/// One quadrant: 16 cells stored row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Stone; 16],
}

impl Grid {
    /// A grid with no stones.
    pub const EMPTY: Grid = Grid {
        cells: [Stone::Empty; 16],
    };

    /// The starting layout: White along row A, Black along row D.
    pub const fn initial() -> Self {
        let mut cells = [Stone::Empty; 16];
        let mut col = 0;
        while col < GRID_SIZE as usize {
            cells[col] = Stone::White;
            cells[12 + col] = Stone::Black;
            col += 1;
        }
        Grid { cells }
    }

    /// Returns the stone at `coord`.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Stone {
        self.cells[coord.index()]
    }

    /// Places `stone` at `coord`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, coord: Coordinate, stone: Stone) {
        self.cells[coord.index()] = stone;
    }

    /// Number of stones of `color` in this grid.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|s| s.is(color)).count()
    }

    /// Coordinates holding a stone of `color`, in row-major order.
    pub fn stones_of(&self, color: Color) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |&c| self.get(c).is(color))
    }

    /// Parses a layout such as `XXXX/..../..../OOOO` (row A first).
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.split('/').collect();
        if rows.len() != GRID_SIZE as usize {
            return Err(LayoutError::WrongRowCount(rows.len()));
        }

        let mut grid = Grid::EMPTY;
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != GRID_SIZE as usize {
                return Err(LayoutError::WrongRowLength { row, len });
            }
            for (col, symbol) in text.chars().enumerate() {
                let stone = Stone::from_symbol(symbol).ok_or(LayoutError::InvalidSymbol(symbol))?;
                grid.cells[row * GRID_SIZE as usize + col] = stone;
            }
        }
        Ok(grid)
    }

    /// Returns the layout string, using `-` for empty cells.
    pub fn to_layout(&self) -> String {
        self.cells
            .chunks(GRID_SIZE as usize)
            .map(|row| row.iter().map(|s| s.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Returns one row of the grid as symbols.
    fn row_symbols(&self, row: usize) -> String {
        let start = row * GRID_SIZE as usize;
        self.cells[start..start + GRID_SIZE as usize]
            .iter()
            .map(|s| s.symbol())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.to_layout())
    }
}

/// The full game board.
///
/// The board is a plain 64-cell value; copying it is the snapshot used for
/// speculative search and undo.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    grids: [Grid; 4],
}

impl Board {
    /// Creates the starting board.
    pub const fn new() -> Self {
        Board {
            grids: [Grid::initial(); 4],
        }
    }

    /// Creates a board with no stones.
    pub const fn empty() -> Self {
        Board {
            grids: [Grid::EMPTY; 4],
        }
    }

    /// Parses four grid layouts separated by whitespace, in the order
    /// topLeft, topRight, botLeft, botRight.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();
        if parts.len() != Quadrant::ALL.len() {
            return Err(LayoutError::WrongGridCount(parts.len()));
        }
        let mut board = Board::empty();
        for (quadrant, part) in Quadrant::ALL.into_iter().zip(parts) {
            board.grids[quadrant.index()] = Grid::from_layout(part)?;
        }
        Ok(board)
    }

    /// Returns the layout string accepted by [`Board::from_layout`].
    pub fn to_layout(&self) -> String {
        self.grids
            .iter()
            .map(Grid::to_layout)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[inline]
    pub fn grid(&self, quadrant: Quadrant) -> &Grid {
        &self.grids[quadrant.index()]
    }

    #[inline]
    pub fn grid_mut(&mut self, quadrant: Quadrant) -> &mut Grid {
        &mut self.grids[quadrant.index()]
    }

    #[inline]
    pub fn get(&self, quadrant: Quadrant, coord: Coordinate) -> Stone {
        self.grid(quadrant).get(coord)
    }

    #[inline]
    pub fn set(&mut self, quadrant: Quadrant, coord: Coordinate, stone: Stone) {
        self.grid_mut(quadrant).set(coord, stone);
    }

    /// Total stones of `color` across all four grids.
    pub fn count(&self, color: Color) -> usize {
        self.grids.iter().map(|g| g.count(color)).sum()
    }

    /// Takes a snapshot to restore later.
    #[inline]
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// Restores a snapshot taken with [`Board::snapshot`].
    #[inline]
    pub fn restore(&mut self, snapshot: &Board) {
        *self = *snapshot;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_layout())
    }
}

/// Renders the dark boards on the left and the light boards on the right,
/// White's home row of boards on top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   dark       light")?;
        writeln!(f, "   1234       1234")?;
        let halves = [
            (Quadrant::TopLeft, Quadrant::TopRight),
            (Quadrant::BotLeft, Quadrant::BotRight),
        ];
        for (i, (left, right)) in halves.into_iter().enumerate() {
            if i > 0 {
                writeln!(f, "   ----------------")?;
            }
            for row in 0..GRID_SIZE {
                let letter = (b'A' + row) as char;
                writeln!(
                    f,
                    "{letter}  {}    {letter}  {}",
                    self.grid(left).row_symbols(row as usize),
                    self.grid(right).row_symbols(row as usize),
                )?;
            }
        }
        write!(f, "O = Black   X = White")
    }
}
