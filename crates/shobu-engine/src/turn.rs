//! Committing moves to a board.
//!
//! The passive and aggressive halves of a turn always touch different
//! quadrants, and each half writes only inside its own quadrant.

use crate::movegen::{check_passive, resolve_aggressive, PushOutcome, Rejection, ValidationError};
use crate::{Board, Grid};
use shobu_core::{AggressiveMove, Color, Coordinate, PassiveMove, Quadrant, Stone, Vector};
use thiserror::Error;

/// Why a turn could not be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("illegal passive move: {0}")]
    Passive(#[from] ValidationError),

    #[error("aggressive move {aggressive} must repeat the passive vector {expected}")]
    VectorMismatch {
        aggressive: AggressiveMove,
        expected: Vector,
    },

    #[error("{aggressive} is not played on a partner of {passive}")]
    NotPartnerQuadrant {
        aggressive: AggressiveMove,
        passive: Quadrant,
    },

    #[error("{at} on {quadrant} is not a {color} stone")]
    NotOwnStone {
        quadrant: Quadrant,
        at: Coordinate,
        color: Color,
    },

    #[error("illegal aggressive move: {0}")]
    Rejected(#[from] Rejection),
}

/// Moves the passive stone. The mover is the owner of the move's quadrant.
pub fn apply_passive(board: &mut Board, mv: PassiveMove) {
    let grid = board.grid_mut(mv.quadrant);
    grid.set(mv.start, Stone::Empty);
    grid.set(mv.end, mv.color().stone());
}

/// Moves the aggressive stone of `color` and applies the push side effects
/// computed by [`resolve_aggressive`].
pub fn apply_aggressive(board: &mut Board, mv: AggressiveMove, color: Color, outcome: PushOutcome) {
    let grid = board.grid_mut(mv.quadrant);
    if let Some(push) = outcome.push {
        grid.set(push.end, push.stone.stone());
    }
    grid.set(mv.start, Stone::Empty);
    grid.set(mv.end, color.stone());
    if let Some(mid) = outcome.double_push {
        grid.set(mid, Stone::Empty);
    }
}

/// Checks a full turn without touching the board, returning the push outcome
/// of the aggressive half.
pub fn validate_turn(
    board: &Board,
    passive: PassiveMove,
    aggressive: AggressiveMove,
) -> Result<PushOutcome, ApplyError> {
    let color = passive.color();
    check_passive(board, passive, color)?;

    if aggressive.vector() != passive.vector() {
        return Err(ApplyError::VectorMismatch {
            aggressive,
            expected: passive.vector(),
        });
    }
    if !passive.quadrant.pairs_with(aggressive.quadrant) {
        return Err(ApplyError::NotPartnerQuadrant {
            aggressive,
            passive: passive.quadrant,
        });
    }
    let grid = board.grid(aggressive.quadrant);
    if !grid.get(aggressive.start).is(color) {
        return Err(ApplyError::NotOwnStone {
            quadrant: aggressive.quadrant,
            at: aggressive.start,
            color,
        });
    }
    Ok(resolve_aggressive(grid, aggressive.start, aggressive.end, color)?)
}

/// The grids a turn overwrote, enough to take it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    passive: (Quadrant, Grid),
    aggressive: (Quadrant, Grid),
}

/// Validates and commits a turn. On error the board is left untouched.
pub fn apply_turn(
    board: &mut Board,
    passive: PassiveMove,
    aggressive: AggressiveMove,
) -> Result<Undo, ApplyError> {
    let outcome = validate_turn(board, passive, aggressive)?;
    let undo = Undo {
        passive: (passive.quadrant, *board.grid(passive.quadrant)),
        aggressive: (aggressive.quadrant, *board.grid(aggressive.quadrant)),
    };
    apply_passive(board, passive);
    apply_aggressive(board, aggressive, passive.color(), outcome);
    Ok(undo)
}

/// Takes back a turn committed by [`apply_turn`].
pub fn undo_turn(board: &mut Board, undo: Undo) {
    let (quadrant, grid) = undo.aggressive;
    *board.grid_mut(quadrant) = grid;
    let (quadrant, grid) = undo.passive;
    *board.grid_mut(quadrant) = grid;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::Push;

    fn c(text: &str) -> Coordinate {
        Coordinate::parse(text).unwrap()
    }

    #[test]
    fn apply_passive_moves_one_stone() {
        let mut board = Board::new();
        apply_passive(&mut board, "botLeft,D4,C4".parse().unwrap());
        assert_eq!(board.grid(Quadrant::BotLeft).to_layout(), "XXXX/----/---O/OOO-");
        for q in [Quadrant::TopLeft, Quadrant::TopRight, Quadrant::BotRight] {
            assert_eq!(*board.grid(q), Grid::initial());
        }
    }

    #[test]
    fn apply_aggressive_with_push() {
        let mut board = Board::from_layout(
            "XXXX/----/----/OOOO OX--/----/----/-OOO XXXX/----/----/OOOO XXXX/----/----/OOOO",
        )
        .unwrap();
        let mv: AggressiveMove = "topRight,A1,A2".parse().unwrap();
        let outcome = resolve_aggressive(board.grid(mv.quadrant), mv.start, mv.end, Color::Black)
            .unwrap();
        assert_eq!(
            outcome.push,
            Some(Push {
                stone: Color::White,
                end: c("A3"),
            })
        );
        apply_aggressive(&mut board, mv, Color::Black, outcome);
        assert_eq!(board.grid(Quadrant::TopRight).to_layout(), "-OX-/----/----/-OOO");
    }

    #[test]
    fn apply_aggressive_with_double_push() {
        let mut board = Board::from_layout(
            "XXXX/----/----/OOOO ----/----/X---/O--- XXXX/----/----/OOOO XXXX/----/----/OOOO",
        )
        .unwrap();
        let mv: AggressiveMove = "topRight,D1,B1".parse().unwrap();
        let outcome = resolve_aggressive(board.grid(mv.quadrant), mv.start, mv.end, Color::Black)
            .unwrap();
        apply_aggressive(&mut board, mv, Color::Black, outcome);
        assert_eq!(board.grid(Quadrant::TopRight).to_layout(), "X---/O---/----/----");
    }

    #[test]
    fn apply_turn_and_undo() {
        let mut board = Board::new();
        let passive: PassiveMove = "botLeft,D4,C4".parse().unwrap();
        let aggressive: AggressiveMove = "topRight,D1,C1".parse().unwrap();
        let undo = apply_turn(&mut board, passive, aggressive).unwrap();
        assert_eq!(board.grid(Quadrant::BotLeft).to_layout(), "XXXX/----/---O/OOO-");
        assert_eq!(board.grid(Quadrant::TopRight).to_layout(), "XXXX/----/O---/-OOO");
        undo_turn(&mut board, undo);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn apply_turn_rejects_mismatched_halves() {
        let mut board = Board::new();
        let passive: PassiveMove = "botLeft,D4,C4".parse().unwrap();

        let wrong_vector: AggressiveMove = "topRight,D1,B1".parse().unwrap();
        assert!(matches!(
            apply_turn(&mut board, passive, wrong_vector),
            Err(ApplyError::VectorMismatch { .. })
        ));

        let wrong_board: AggressiveMove = "topLeft,D1,C1".parse().unwrap();
        assert!(matches!(
            apply_turn(&mut board, passive, wrong_board),
            Err(ApplyError::NotPartnerQuadrant { .. })
        ));

        let not_own: AggressiveMove = "topRight,B1,A1".parse().unwrap();
        assert!(matches!(
            apply_turn(&mut board, passive, not_own),
            Err(ApplyError::NotOwnStone { .. })
        ));

        let blocked: AggressiveMove = "topRight,D1,C1".parse().unwrap();
        let mut crowded = Board::from_layout(
            "XXXX/----/----/OOOO XXXX/----/O---/OOO- XXXX/----/----/OOOO XXXX/----/----/OOOO",
        )
        .unwrap();
        assert_eq!(
            apply_turn(&mut crowded, passive, blocked),
            Err(ApplyError::Rejected(Rejection::SameColorBlocked))
        );

        let illegal_passive: PassiveMove = "botLeft,D4,D3".parse().unwrap();
        assert!(matches!(
            apply_turn(&mut board, illegal_passive, blocked),
            Err(ApplyError::Passive(ValidationError::DestinationOccupied(_)))
        ));
        assert_eq!(board, Board::new());
    }
}
