//! A single peg: a LIFO stack of disks.

use crate::error::PegError;
use crate::types::{Disk, PegLabel};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A labelled stack of disks, stored bottom-to-top.
///
/// `push` does not check the stacking rule; that is the job of
/// [`crate::rules::check_move`]. Between operations the disks of a peg
/// managed by [`crate::GameState`] are strictly decreasing bottom-to-top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peg {
    label: PegLabel,
    disks: Vec<Disk>,
}

impl Peg {
    /// Creates an empty peg.
    #[instrument]
    pub fn new(label: PegLabel) -> Self {
        Self {
            label,
            disks: Vec::new(),
        }
    }

    /// Returns the label of this peg.
    pub fn label(&self) -> PegLabel {
        self.label
    }

    /// Places a disk on top. Always succeeds.
    #[instrument(skip(self), fields(peg = %self.label))]
    pub fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
        trace!(size = self.disks.len(), "Disk pushed");
    }

    /// Removes and returns the top disk.
    ///
    /// # Errors
    ///
    /// Returns [`PegError::Empty`] if the peg has no disks.
    #[instrument(skip(self), fields(peg = %self.label))]
    pub fn pop(&mut self) -> Result<Disk, PegError> {
        self.disks.pop().ok_or(PegError::Empty(self.label))
    }

    /// Returns the top disk without removing it.
    pub fn peek_top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Index of the top disk, counted from the bottom; `None` when empty.
    pub fn top_index(&self) -> Option<usize> {
        self.disks.len().checked_sub(1)
    }

    /// Returns true if the peg holds no disks.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Number of disks on the peg.
    pub fn size(&self) -> usize {
        self.disks.len()
    }

    /// Disks bottom-to-top, borrowed.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Independent copy of the disks, bottom-to-top.
    pub fn snapshot(&self) -> Vec<Disk> {
        self.disks.clone()
    }

    /// Removes every disk.
    pub fn clear(&mut self) {
        self.disks.clear();
    }

    /// True if sizes strictly decrease from bottom to top.
    pub fn is_descending(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0] > pair[1])
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [", self.label)?;
        for (i, disk) in self.disks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", disk)?;
        }
        write!(f, "]")
    }
}
