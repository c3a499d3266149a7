//! Aggressive move validation and push resolution.
//!
//! An aggressive move may shove at most one opponent stone along its path.
//! The stone lands on the square just past the mover's destination, or leaves
//! play when that square is off the grid. Pushing a friendly stone, pushing
//! two stones, or pushing into an occupied square is illegal.

use crate::Grid;
use shobu_core::{Color, Coordinate, Stone, Vector};
use thiserror::Error;

/// Why an aggressive move is illegal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("cannot push stones of the same color")]
    SameColorBlocked,

    #[error("cannot push a stone into another stone")]
    PushBlocked,

    #[error("an aggressive move must be a straight line of one or two squares")]
    IllegalGeometry,
}

/// A stone relocated by an aggressive move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Push {
    /// Color of the pushed stone.
    pub stone: Color,
    /// Where it comes to rest.
    pub end: Coordinate,
}

/// Side effects of a legal aggressive move, besides moving the mover's stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PushOutcome {
    /// The pushed stone's new square. `None` when nothing is pushed or the
    /// pushed stone left the grid.
    pub push: Option<Push>,
    /// The intermediate square of a two-step move that shoved a stone out of
    /// its path.
    pub double_push: Option<Coordinate>,
    /// An opponent stone was pushed off the grid and left play.
    pub ejected: bool,
}

impl PushOutcome {
    /// A move that disturbs no other stone.
    pub const QUIET: PushOutcome = PushOutcome {
        push: None,
        double_push: None,
        ejected: false,
    };

    /// A move that pushes the stone on its destination off the grid.
    pub const EJECTED: PushOutcome = PushOutcome {
        push: None,
        double_push: None,
        ejected: true,
    };

    /// Returns true if no other stone is affected.
    #[inline]
    pub fn is_quiet(&self) -> bool {
        self.push.is_none() && self.double_push.is_none() && !self.ejected
    }
}

/// Decides whether the stone of `color` at `start` may move to `end` inside
/// `grid` as an aggressive move, and what it pushes.
///
/// The caller guarantees `start` holds the mover's stone and that the move
/// repeats the passive vector.
pub fn resolve_aggressive(
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
    color: Color,
) -> Result<PushOutcome, Rejection> {
    let vector = Vector::between(start, end);
    if !vector.is_line() || vector.distance() > 2 {
        return Err(Rejection::IllegalGeometry);
    }
    let friendly = color.stone();
    let unit = vector.unit();

    if vector.distance() == 1 {
        return resolve_landing(grid, end, unit, friendly);
    }

    let mid = start.advance(unit).ok_or(Rejection::IllegalGeometry)?;
    match grid.get(mid) {
        Stone::Empty => resolve_landing(grid, end, unit, friendly),
        stone if stone == friendly => Err(Rejection::SameColorBlocked),
        stone => {
            // The stone in the path travels ahead of the mover, so the
            // destination must be clear for it to pass through.
            if !grid.get(end).is_empty() {
                return Err(Rejection::PushBlocked);
            }
            let (push, ejected) = match end.advance(unit) {
                None => (None, true),
                Some(beyond) if !grid.get(beyond).is_empty() => {
                    return Err(Rejection::PushBlocked)
                }
                Some(beyond) => (
                    stone.color().map(|color| Push { stone: color, end: beyond }),
                    false,
                ),
            };
            Ok(PushOutcome {
                push,
                double_push: Some(mid),
                ejected,
            })
        }
    }
}

/// Resolves the mover landing on `end`, travelling in direction `unit`.
fn resolve_landing(
    grid: &Grid,
    end: Coordinate,
    unit: Vector,
    friendly: Stone,
) -> Result<PushOutcome, Rejection> {
    let occupant = grid.get(end);
    if occupant.is_empty() {
        return Ok(PushOutcome::QUIET);
    }
    if occupant == friendly {
        return Err(Rejection::SameColorBlocked);
    }
    match end.advance(unit) {
        // Pushed off the edge: the stone leaves play.
        None => Ok(PushOutcome::EJECTED),
        Some(target) if !grid.get(target).is_empty() => Err(Rejection::PushBlocked),
        Some(target) => Ok(PushOutcome {
            push: occupant.color().map(|color| Push { stone: color, end: target }),
            double_push: None,
            ejected: false,
        }),
    }
}
