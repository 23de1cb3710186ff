//! Serializable views of the game for rendering.

use crate::game::PlayState;
use crate::types::{Disk, PegLabel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contents of one peg, bottom-to-top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PegSnapshot {
    /// Peg label.
    pub label: PegLabel,
    /// Disks, bottom-to-top.
    pub disks: Vec<Disk>,
}

/// Everything a UI renders after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    /// Disks in play.
    pub disks: u8,
    /// Peg contents, left to right.
    pub pegs: Vec<PegSnapshot>,
    /// Moves applied since the last reset.
    pub steps_taken: u64,
    /// Fewest moves that solve the puzzle.
    pub min_steps: u64,
    /// True if the destination holds every disk.
    pub completed: bool,
    /// Lifecycle state.
    pub play_state: PlayState,
    /// Index of the next planned move.
    pub cursor: usize,
    /// Length of the current plan, if any.
    pub plan_len: Option<usize>,
}

impl GameSnapshot {
    /// Contents of the peg with the given label.
    pub fn peg(&self, label: PegLabel) -> Option<&PegSnapshot> {
        self.pegs.iter().find(|peg| peg.label == label)
    }

    /// Serializes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::GameState;
    use crate::types::PegLabel;

    #[test]
    fn test_snapshot_json_has_pegs() {
        let game = GameState::new(2).unwrap();
        let json = game.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["pegs"][0]["label"], "A");
        assert_eq!(value["pegs"][0]["disks"], serde_json::json!([2, 1]));
        assert_eq!(value["play_state"], "Idle");
        assert_eq!(value["plan_len"], serde_json::Value::Null);
    }

    #[test]
    fn test_snapshot_peg_lookup() {
        let game = GameState::new(3).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.peg(PegLabel::A).map(|p| p.disks.len()), Some(3));
        assert_eq!(snapshot.peg(PegLabel::C).map(|p| p.disks.len()), Some(0));
    }
}
