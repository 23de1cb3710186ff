//! Disk conservation invariant: disks are neither lost nor duplicated.

use super::Invariant;
use crate::GameState;
use crate::types::Disk;

/// Invariant: the pegs together hold exactly the disks `1..=n`, once each.
pub struct DiskConservationInvariant;

impl Invariant<GameState> for DiskConservationInvariant {
    fn holds(game: &GameState) -> bool {
        let mut all: Vec<Disk> = game
            .pegs()
            .iter()
            .flat_map(|peg| peg.disks().iter().copied())
            .collect();
        all.sort();

        all.len() == usize::from(game.disks())
            && all
                .iter()
                .zip(1..=game.disks())
                .all(|(disk, size)| disk.size() == size)
    }

    fn description() -> &'static str {
        "Pegs hold each disk 1..=n exactly once"
    }
}
