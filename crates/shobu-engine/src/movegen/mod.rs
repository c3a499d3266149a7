//! Move generation and validation.
//!
//! A turn is generated in two halves:
//! - the passive move, validated against the mover's home quadrants
//! - the aggressive moves that may follow it, enumerated lazily over the two
//!   partner quadrants and filtered through the push resolver
//!
//! A passive move is only legal when at least one aggressive move follows it.

mod perft;
mod push;

pub use perft::{perft, perft_divide};
pub use push::{resolve_aggressive, Push, PushOutcome, Rejection};

use crate::Board;
use shobu_core::{
    split_fields, AggressiveMove, Color, Coordinate, CoordinateError, PassiveMove, Quadrant, Turn,
    Vector,
};
use thiserror::Error;

/// Why a passive move was refused. Checks run in declaration order and stop
/// at the first failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid input: expected quadrant,start,end")]
    MalformedInput,

    #[error("'{0}' is not a quadrant")]
    InvalidQuadrant(String),

    #[error("{quadrant} is not a {color} home board")]
    WrongHomeQuadrant { quadrant: Quadrant, color: Color },

    #[error(transparent)]
    MalformedCoordinate(#[from] CoordinateError),

    #[error("{at} is not a {color} stone")]
    NotOwnStone { at: Coordinate, color: Color },

    #[error("{0} is not empty")]
    DestinationOccupied(Coordinate),

    #[error("{start} to {end} is not a straight line of one or two squares")]
    IllegalGeometry { start: Coordinate, end: Coordinate },

    #[error("no aggressive move can follow this passive move")]
    NoAggressiveFollowUp,
}

/// Validates a passive move given as raw text fields.
///
/// Empty fields count as missing. On success the move is returned but not
/// played; committing it is up to the caller.
pub fn validate_passive_move(
    board: &Board,
    quadrant: &str,
    start: &str,
    end: &str,
    color: Color,
) -> Result<PassiveMove, ValidationError> {
    let (quadrant, start, end) = (quadrant.trim(), start.trim(), end.trim());
    if quadrant.is_empty() || start.is_empty() || end.is_empty() {
        return Err(ValidationError::MalformedInput);
    }

    let quadrant = Quadrant::from_name(quadrant)
        .ok_or_else(|| ValidationError::InvalidQuadrant(quadrant.to_string()))?;
    if !quadrant.is_home_of(color) {
        return Err(ValidationError::WrongHomeQuadrant { quadrant, color });
    }

    let mv = PassiveMove::new(quadrant, Coordinate::parse(start)?, Coordinate::parse(end)?);
    check_passive(board, mv, color)?;
    Ok(mv)
}

/// Validates a passive move written as `quadrant,start,end`.
pub fn validate_passive_notation(
    board: &Board,
    text: &str,
    color: Color,
) -> Result<PassiveMove, ValidationError> {
    let [quadrant, start, end] = split_fields(text).map_err(|_| ValidationError::MalformedInput)?;
    validate_passive_move(board, quadrant, start, end, color)
}

/// Checks an already-parsed passive move against the board.
pub fn check_passive(board: &Board, mv: PassiveMove, color: Color) -> Result<(), ValidationError> {
    check_passive_shape(board, mv, color)?;
    if aggressive_moves(board, mv, color).next().is_none() {
        return Err(ValidationError::NoAggressiveFollowUp);
    }
    Ok(())
}

/// Everything but the follow-up requirement.
fn check_passive_shape(board: &Board, mv: PassiveMove, color: Color) -> Result<(), ValidationError> {
    if !mv.quadrant.is_home_of(color) {
        return Err(ValidationError::WrongHomeQuadrant {
            quadrant: mv.quadrant,
            color,
        });
    }

    let grid = board.grid(mv.quadrant);
    if !grid.get(mv.start).is(color) {
        return Err(ValidationError::NotOwnStone {
            at: mv.start,
            color,
        });
    }
    if !grid.get(mv.end).is_empty() {
        return Err(ValidationError::DestinationOccupied(mv.end));
    }

    let vector = mv.vector();
    if !vector.is_line() || vector.distance() > 2 {
        return Err(ValidationError::IllegalGeometry {
            start: mv.start,
            end: mv.end,
        });
    }
    Ok(())
}

/// Enumerates the legal aggressive moves that may follow `passive`.
///
/// Moves come out partner by partner (in [`Quadrant::partners`] order), then
/// by starting stone in row-major order. The iterator is lazy and can be
/// cloned to restart it.
pub fn aggressive_moves(board: &Board, passive: PassiveMove, color: Color) -> AggressiveMoves<'_> {
    AggressiveMoves {
        board,
        color,
        vector: passive.vector(),
        partners: passive.quadrant.partners(),
        partner: 0,
        cell: 0,
    }
}

/// Lazy sequence of legal aggressive moves. See [`aggressive_moves`].
#[derive(Debug, Clone)]
pub struct AggressiveMoves<'a> {
    board: &'a Board,
    color: Color,
    vector: Vector,
    partners: [Quadrant; 2],
    partner: usize,
    cell: u8,
}

impl AggressiveMoves<'_> {
    /// Advances to the next legal move, returning it with its push outcome.
    pub fn next_resolved(&mut self) -> Option<(AggressiveMove, PushOutcome)> {
        while let Some(&quadrant) = self.partners.get(self.partner) {
            let grid = self.board.grid(quadrant);
            while let Some(start) = Coordinate::from_index(self.cell) {
                self.cell += 1;
                if !grid.get(start).is(self.color) {
                    continue;
                }
                let Some(end) = start.advance(self.vector) else {
                    continue;
                };
                if let Ok(outcome) = resolve_aggressive(grid, start, end, self.color) {
                    return Some((AggressiveMove::new(quadrant, start, end), outcome));
                }
            }
            self.partner += 1;
            self.cell = 0;
        }
        None
    }
}

impl Iterator for AggressiveMoves<'_> {
    type Item = AggressiveMove;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_resolved().map(|(mv, _)| mv)
    }
}

/// All legal passive moves for `color`: home quadrants in board order, stones
/// in row-major order, directions clockwise from "up", one step before two.
pub fn passive_moves(board: &Board, color: Color) -> Vec<PassiveMove> {
    passive_candidates(board, color)
        .filter(|&mv| aggressive_moves(board, mv, color).next().is_some())
        .collect()
}

fn passive_candidates(board: &Board, color: Color) -> impl Iterator<Item = PassiveMove> + '_ {
    color.home_quadrants().into_iter().flat_map(move |quadrant| {
        board.grid(quadrant).stones_of(color).flat_map(move |start| {
            Vector::DIRECTIONS.into_iter().flat_map(move |dir| {
                (1..=2).filter_map(move |distance| {
                    let end = start.advance(dir.scaled(distance))?;
                    let mv = PassiveMove::new(quadrant, start, end);
                    check_passive_shape(board, mv, color).ok().map(|_| mv)
                })
            })
        })
    })
}

/// Every legal turn for `color`, passive moves in [`passive_moves`] order and
/// each followed by its aggressive moves in [`aggressive_moves`] order.
pub fn legal_turns(board: &Board, color: Color) -> Vec<Turn> {
    let mut turns = Vec::new();
    for passive in passive_candidates(board, color) {
        turns.extend(aggressive_moves(board, passive, color).map(|a| Turn::new(passive, a)));
    }
    turns
}

/// Returns true if `color` has at least one legal turn.
pub fn has_legal_turn(board: &Board, color: Color) -> bool {
    passive_candidates(board, color).any(|mv| aggressive_moves(board, mv, color).next().is_some())
}
