//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth. A position where
//! a quadrant has been cleared is terminal and has no children.

use super::legal_turns;
use crate::rules::check_win;
use crate::turn::apply_turn;
use crate::Board;
use shobu_core::Color;

/// Counts the number of leaf nodes at the given depth, `color` to move.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if check_win(board).is_some() {
        return 0;
    }

    let turns = legal_turns(board, color);

    if depth == 1 {
        return turns.len() as u64;
    }

    let mut nodes = 0u64;
    for turn in &turns {
        let mut next = *board;
        if apply_turn(&mut next, turn.passive, turn.aggressive).is_ok() {
            nodes += perft(&next, color.opposite(), depth - 1);
        }
    }
    nodes
}

/// Node counts under each legal turn, sorted by turn notation.
pub fn perft_divide(board: &Board, color: Color, depth: u32) -> Vec<(String, u64)> {
    let turns = legal_turns(board, color);
    let mut results = Vec::with_capacity(turns.len());

    for turn in &turns {
        let mut next = *board;
        if apply_turn(&mut next, turn.passive, turn.aggressive).is_err() {
            continue;
        }
        let nodes = if depth > 1 {
            perft(&next, color.opposite(), depth - 1)
        } else {
            1
        };
        results.push((turn.to_string(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
