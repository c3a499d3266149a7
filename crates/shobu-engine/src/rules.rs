//! Win detection.
//!
//! A player wins by pushing every opposing stone off any one quadrant.

use crate::{Board, Grid};
use shobu_core::{Color, Quadrant};

/// State of a single quadrant as seen by the win scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadrantScan {
    /// Both colors still have stones here.
    Contested,
    /// The given color has no stones left here.
    Eliminated(Color),
    /// Neither color has a stone here. Unreachable in play.
    Vacant,
}

/// How a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// Every opposing stone was pushed off this quadrant.
    Elimination(Quadrant),
    /// The loser had no legal turn.
    NoLegalTurn,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Color,
    pub reason: WinReason,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            WinReason::Elimination(quadrant) => write!(
                f,
                "{} wins by clearing {} of {} stones",
                self.winner,
                quadrant,
                self.winner.opposite()
            ),
            WinReason::NoLegalTurn => write!(
                f,
                "{} wins: {} has no legal turn",
                self.winner,
                self.winner.opposite()
            ),
        }
    }
}

/// Counts both colors in `grid`.
pub fn scan_quadrant(grid: &Grid) -> QuadrantScan {
    match (grid.count(Color::Black), grid.count(Color::White)) {
        (0, 0) => QuadrantScan::Vacant,
        (0, _) => QuadrantScan::Eliminated(Color::Black),
        (_, 0) => QuadrantScan::Eliminated(Color::White),
        _ => QuadrantScan::Contested,
    }
}

/// Returns the first quadrant (in board order) where a color has been
/// eliminated, together with the winner.
pub fn winning_quadrant(board: &Board) -> Option<(Quadrant, Color)> {
    Quadrant::ALL.into_iter().find_map(|quadrant| match scan_quadrant(board.grid(quadrant)) {
        QuadrantScan::Eliminated(loser) => Some((quadrant, loser.opposite())),
        QuadrantScan::Vacant => {
            tracing::warn!(%quadrant, "quadrant holds no stones of either color");
            None
        }
        QuadrantScan::Contested => None,
    })
}

/// Returns the winner, if any quadrant has lost all stones of one color.
pub fn check_win(board: &Board) -> Option<Color> {
    winning_quadrant(board).map(|(_, winner)| winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_is_contested() {
        let board = Board::new();
        for q in Quadrant::ALL {
            assert_eq!(scan_quadrant(board.grid(q)), QuadrantScan::Contested);
        }
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn eliminated_white_gives_black_the_win() {
        let grid = Grid::from_layout("----/-O--/----/O---").unwrap();
        assert_eq!(scan_quadrant(&grid), QuadrantScan::Eliminated(Color::White));
        // Scanning again gives the same answer.
        assert_eq!(scan_quadrant(&grid), QuadrantScan::Eliminated(Color::White));

        let board = Board::from_layout(
            "XXXX/----/----/OOOO XXXX/----/----/OOOO ----/-O--/----/O--- XXXX/----/----/OOOO",
        )
        .unwrap();
        assert_eq!(winning_quadrant(&board), Some((Quadrant::BotLeft, Color::Black)));
        assert_eq!(check_win(&board), Some(Color::Black));
    }

    #[test]
    fn vacant_quadrant_is_not_a_win() {
        assert_eq!(scan_quadrant(&Grid::EMPTY), QuadrantScan::Vacant);
        let board = Board::from_layout(
            "----/----/----/---- XXXX/----/----/OOOO XXXX/----/----/OOOO XXXX/----/----/OOOO",
        )
        .unwrap();
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn result_display() {
        let result = GameResult {
            winner: Color::White,
            reason: WinReason::Elimination(Quadrant::BotRight),
        };
        assert_eq!(result.to_string(), "White wins by clearing botRight of Black stones");
    }
}
