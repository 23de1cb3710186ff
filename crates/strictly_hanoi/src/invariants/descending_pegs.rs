//! Descending pegs invariant: no disk rests on a smaller one.

use super::Invariant;
use crate::GameState;

/// Invariant: on every peg, sizes strictly decrease from bottom to top.
pub struct DescendingPegsInvariant;

impl Invariant<GameState> for DescendingPegsInvariant {
    fn holds(game: &GameState) -> bool {
        game.pegs().iter().all(|peg| peg.is_descending())
    }

    fn description() -> &'static str {
        "Every peg is strictly descending from bottom to top"
    }
}
