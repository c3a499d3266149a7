//! Seats at the table.

use crate::config::PlayerKind;
use shobu_core::Color;
use shobu_engine::{FirstLegalStrategy, MoveSelectionStrategy, RandomStrategy};

/// Decides turns for one color.
pub enum Player {
    /// Reads turns from the prompt.
    Human,
    /// Asks a strategy for its preferred turn.
    Bot(Box<dyn MoveSelectionStrategy>),
}

impl Player {
    /// Builds the player for `color`. Seeded random players get distinct
    /// streams per color.
    pub fn new(kind: PlayerKind, color: Color, seed: Option<u64>) -> Self {
        match kind {
            PlayerKind::Human => Player::Human,
            PlayerKind::Random => Player::Bot(Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed.wrapping_add(color.index() as u64)),
                None => RandomStrategy::new(),
            })),
            PlayerKind::First => Player::Bot(Box::new(FirstLegalStrategy)),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human)
    }

    /// Label used in prompts and logs.
    pub fn name(&self) -> &str {
        match self {
            Player::Human => "human",
            Player::Bot(strategy) => strategy.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_kind() {
        assert!(Player::new(PlayerKind::Human, Color::Black, None).is_human());
        assert_eq!(Player::new(PlayerKind::Random, Color::White, Some(3)).name(), "random");
        assert_eq!(Player::new(PlayerKind::First, Color::Black, None).name(), "first");
    }
}
