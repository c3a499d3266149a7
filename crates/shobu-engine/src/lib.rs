//! Move-legality and board-transition engine for Shobu.
//!
//! This crate provides:
//! - [`Board`] - four 4x4 grids of stones
//! - [`Game`] - turn order, win detection and take-backs
//! - Passive move validation and lazy aggressive move enumeration
//! - Push resolution for aggressive moves
//! - [`MoveSelectionStrategy`] - the seam for computer players
//!
//! # Architecture
//!
//! Validation is split along the two halves of a turn. A passive move is
//! checked in a fixed order and is only legal if some aggressive move can
//! repeat its vector on a partner quadrant. Aggressive moves are produced by
//! [`aggressive_moves`], which resolves pushes with [`resolve_aggressive`]
//! without mutating anything. [`apply_turn`] commits both halves and returns
//! an [`Undo`] record.
//!
//! # Example
//!
//! ```
//! use shobu_engine::{legal_turns, validate_passive_notation, aggressive_moves, Board, Game};
//! use shobu_core::Color;
//!
//! let board = Board::new();
//! let passive = validate_passive_notation(&board, "botLeft,D4,C4", Color::Black).unwrap();
//! let options: Vec<_> = aggressive_moves(&board, passive, Color::Black).collect();
//! assert_eq!(options.len(), 8);
//! assert_eq!(legal_turns(&board, Color::Black).len(), 232);
//!
//! let mut game = Game::new();
//! game.play_notation("botLeft,D4,C4", "topRight,D1,C1").unwrap();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;
pub mod strategy;
mod turn;

pub use board::{Board, Grid, LayoutError};
pub use game::{Game, GameError, PlayedTurn};
pub use movegen::{
    aggressive_moves, check_passive, has_legal_turn, legal_turns, passive_moves, perft,
    perft_divide, resolve_aggressive, validate_passive_move, validate_passive_notation,
    AggressiveMoves, Push, PushOutcome, Rejection, ValidationError,
};
pub use rules::{check_win, scan_quadrant, winning_quadrant, GameResult, QuadrantScan, WinReason};
pub use strategy::{FirstLegalStrategy, MoveSelectionStrategy, RandomStrategy};
pub use turn::{
    apply_aggressive, apply_passive, apply_turn, undo_turn, validate_turn, ApplyError, Undo,
};
