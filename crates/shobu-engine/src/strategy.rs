//! Pluggable turn selection.
//!
//! The engine does not search. A [`MoveSelectionStrategy`] receives the board
//! and the color to move and ranks the legal turns; search-based strategies
//! explore with their own board copies, using
//! [`legal_turns`](crate::legal_turns), [`apply_turn`](crate::apply_turn) and
//! [`undo_turn`](crate::undo_turn).

use crate::movegen::legal_turns;
use crate::Board;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use shobu_core::{Color, Turn};

/// Chooses turns for one side.
pub trait MoveSelectionStrategy {
    /// A short name for logs and menus.
    fn name(&self) -> &str;

    /// Returns legal turns for `color`, best first. An empty result means
    /// the side has no legal turn.
    fn rank_turns(&mut self, board: &Board, color: Color) -> Vec<Turn>;

    /// Returns the strategy's preferred turn.
    fn select_turn(&mut self, board: &Board, color: Color) -> Option<Turn> {
        self.rank_turns(board, color).into_iter().next()
    }
}

/// Ranks legal turns in a random order.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible strategy.
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelectionStrategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn rank_turns(&mut self, board: &Board, color: Color) -> Vec<Turn> {
        let mut turns = legal_turns(board, color);
        turns.shuffle(&mut self.rng);
        turns
    }
}

/// Always plays the first legal turn in generation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegalStrategy;

impl MoveSelectionStrategy for FirstLegalStrategy {
    fn name(&self) -> &str {
        "first"
    }

    fn rank_turns(&mut self, board: &Board, color: Color) -> Vec<Turn> {
        legal_turns(board, color)
    }
}
