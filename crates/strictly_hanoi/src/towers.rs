//! The three pegs of one puzzle.

use crate::error::PegError;
use crate::peg::Peg;
use crate::types::{Disk, PegLabel};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three pegs indexed by [`PegLabel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Towers {
    pegs: [Peg; 3],
}

impl Towers {
    /// Three empty pegs.
    pub fn empty() -> Self {
        Self {
            pegs: PegLabel::ALL.map(Peg::new),
        }
    }

    /// Disks `disks..=1` stacked on `on`, largest at the bottom.
    #[instrument]
    pub fn stacked(disks: u8, on: PegLabel) -> Self {
        let mut towers = Self::empty();
        for size in (1..=disks).rev() {
            towers.peg_mut(on).push(Disk::new(size));
        }
        towers
    }

    /// Returns the peg with the given label.
    pub fn peg(&self, label: PegLabel) -> &Peg {
        &self.pegs[label.index()]
    }

    pub(crate) fn peg_mut(&mut self, label: PegLabel) -> &mut Peg {
        &mut self.pegs[label.index()]
    }

    /// All pegs, left to right.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Number of disks across all pegs.
    pub fn total_disks(&self) -> usize {
        self.pegs.iter().map(Peg::size).sum()
    }

    /// Pops the top of `from` and pushes it onto `to` without checking the
    /// stacking rule.
    #[instrument(skip(self))]
    pub(crate) fn transfer(&mut self, from: PegLabel, to: PegLabel) -> Result<Disk, PegError> {
        let disk = self.peg_mut(from).pop()?;
        self.peg_mut(to).push(disk);
        Ok(disk)
    }
}

impl Default for Towers {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Towers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, peg) in self.pegs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", peg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_places_largest_at_bottom() {
        let towers = Towers::stacked(3, PegLabel::A);
        assert_eq!(
            towers.peg(PegLabel::A).snapshot(),
            vec![Disk::new(3), Disk::new(2), Disk::new(1)]
        );
        assert!(towers.peg(PegLabel::B).is_empty());
        assert!(towers.peg(PegLabel::C).is_empty());
        assert_eq!(towers.total_disks(), 3);
    }

    #[test]
    fn test_transfer_moves_top_disk() {
        let mut towers = Towers::stacked(2, PegLabel::B);
        assert_eq!(towers.transfer(PegLabel::B, PegLabel::C), Ok(Disk::new(1)));
        assert_eq!(towers.peg(PegLabel::C).peek_top(), Some(Disk::new(1)));
        assert_eq!(towers.total_disks(), 2);
    }

    #[test]
    fn test_transfer_from_empty_fails() {
        let mut towers = Towers::empty();
        assert_eq!(
            towers.transfer(PegLabel::A, PegLabel::B),
            Err(PegError::Empty(PegLabel::A))
        );
    }

    #[test]
    fn test_display_lists_every_peg() {
        let towers = Towers::stacked(2, PegLabel::A);
        assert_eq!(towers.to_string(), "A: [2, 1]\nB: []\nC: []");
    }
}
