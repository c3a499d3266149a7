//! Full game management with history tracking.
//!
//! The [`Game`] struct owns the authoritative board and enforces turn order:
//! - Black moves first, then the colors alternate
//! - the game ends when a quadrant loses all stones of one color, or when
//!   the side to move has no legal turn
//! - turns can be taken back one at a time

use crate::movegen::{
    aggressive_moves, has_legal_turn, legal_turns, validate_passive_notation, ValidationError,
};
use crate::rules::{winning_quadrant, GameResult, WinReason};
use crate::turn::{apply_turn, undo_turn, ApplyError, Undo};
use crate::Board;
use shobu_core::{AggressiveMove, Color, NotationError, PassiveMove, Turn};
use thiserror::Error;

/// A turn recorded in game history.
#[derive(Debug, Clone, Copy)]
pub struct PlayedTurn {
    /// Who played it.
    pub color: Color,
    pub turn: Turn,
    undo: Undo,
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game has already ended")]
    GameAlreadyOver,

    #[error("it is {expected}'s turn, not {found}'s")]
    WrongSide { expected: Color, found: Color },

    #[error("no turn to take back")]
    NothingToUndo,

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// A Shobu game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<PlayedTurn>,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the starting board, Black to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            side_to_move: Color::Black,
            history: Vec::new(),
            result: None,
        }
    }

    /// Creates a game from a custom board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            history: Vec::new(),
            result: None,
        };
        // Check if the game is already over
        game.check_game_end();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn history(&self) -> &[PlayedTurn] {
        &self.history
    }

    /// Number of turns played.
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }

    /// All legal turns for the side to move.
    pub fn legal_turns(&self) -> Vec<Turn> {
        legal_turns(&self.board, self.side_to_move)
    }

    /// Validates a passive move in `quadrant,start,end` notation for the
    /// side to move.
    pub fn validate_passive(&self, text: &str) -> Result<PassiveMove, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        Ok(validate_passive_notation(
            &self.board,
            text,
            self.side_to_move,
        )?)
    }

    /// The aggressive moves that may follow `passive`, in menu order.
    pub fn aggressive_options(&self, passive: PassiveMove) -> Vec<AggressiveMove> {
        aggressive_moves(&self.board, passive, self.side_to_move).collect()
    }

    /// Plays a full turn for the side to move.
    pub fn play(&mut self, turn: Turn) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        if turn.color() != self.side_to_move {
            return Err(GameError::WrongSide {
                expected: self.side_to_move,
                found: turn.color(),
            });
        }

        let undo = apply_turn(&mut self.board, turn.passive, turn.aggressive)?;
        tracing::debug!(color = %self.side_to_move, %turn, "turn played");
        self.history.push(PlayedTurn {
            color: self.side_to_move,
            turn,
            undo,
        });
        self.side_to_move = self.side_to_move.opposite();
        self.check_game_end();
        Ok(())
    }

    /// Plays a turn given as two `quadrant,start,end` moves.
    pub fn play_notation(&mut self, passive: &str, aggressive: &str) -> Result<(), GameError> {
        let turn = Turn::new(passive.parse()?, aggressive.parse()?);
        self.play(turn)
    }

    /// Takes back the last turn, reopening the game if it had ended.
    pub fn undo(&mut self) -> Result<Turn, GameError> {
        let played = self.history.pop().ok_or(GameError::NothingToUndo)?;
        undo_turn(&mut self.board, played.undo);
        self.side_to_move = played.color;
        self.result = None;
        tracing::debug!(color = %played.color, turn = %played.turn, "turn taken back");
        Ok(played.turn)
    }

    /// Checks if the game has ended and updates the result.
    fn check_game_end(&mut self) {
        self.result = if let Some((quadrant, winner)) = winning_quadrant(&self.board) {
            Some(GameResult {
                winner,
                reason: WinReason::Elimination(quadrant),
            })
        } else if !has_legal_turn(&self.board, self.side_to_move) {
            Some(GameResult {
                winner: self.side_to_move.opposite(),
                reason: WinReason::NoLegalTurn,
            })
        } else {
            None
        };
        if let Some(result) = self.result {
            tracing::info!(turns = self.history.len(), "{}", result);
        }
    }
}
