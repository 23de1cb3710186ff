//! Completion detection.

use crate::towers::Towers;
use crate::types::PegLabel;

/// True if `destination` holds all `disks` disks.
///
/// Pegs only ever receive disks through the stacking rule, so a full
/// destination is also correctly ordered.
pub fn is_complete(towers: &Towers, destination: PegLabel, disks: u8) -> bool {
    towers.peg(destination).size() == usize::from(disks)
}
