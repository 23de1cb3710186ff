//! History consistency invariant: every counted step is in the history.

use super::Invariant;
use crate::GameState;

/// Invariant: history length equals the number of steps taken.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().len() as u64 == game.steps_taken()
    }

    fn description() -> &'static str {
        "History length matches steps taken"
    }
}
