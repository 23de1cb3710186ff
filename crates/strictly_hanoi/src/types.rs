//! Core domain types for the Tower of Hanoi.

use crate::error::ConfigurationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Smallest supported disk count.
pub const MIN_DISKS: u8 = 1;

/// Largest supported disk count.
pub const MAX_DISKS: u8 = 16;

/// Disk count a fresh session starts with.
pub const DEFAULT_DISKS: u8 = 5;

/// One of the three pegs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumIter,
)]
pub enum PegLabel {
    /// Left peg, where disks start by default.
    A,
    /// Middle peg.
    B,
    /// Right peg, the default destination.
    C,
}

impl PegLabel {
    /// All three labels, left to right.
    pub const ALL: [PegLabel; 3] = [PegLabel::A, PegLabel::B, PegLabel::C];

    /// Index of this peg in left-to-right order (0-2).
    pub fn index(self) -> usize {
        match self {
            PegLabel::A => 0,
            PegLabel::B => 1,
            PegLabel::C => 2,
        }
    }

    /// Parses a label, ignoring surrounding whitespace and case.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownPeg`] for anything but `A`, `B` or `C`.
    #[instrument]
    pub fn parse(s: &str) -> Result<Self, ConfigurationError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(PegLabel::A),
            "B" => Ok(PegLabel::B),
            "C" => Ok(PegLabel::C),
            _ => Err(ConfigurationError::UnknownPeg(s.to_string())),
        }
    }
}

impl FromStr for PegLabel {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A disk, identified by its size. Larger numbers are wider disks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Disk(u8);

impl Disk {
    /// Creates a disk of the given size.
    pub const fn new(size: u8) -> Self {
        Self(size)
    }

    /// Returns the size of the disk.
    pub fn size(self) -> u8 {
        self.0
    }
}

/// Roles the three pegs play in one puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct PegAssignment {
    source: PegLabel,
    destination: PegLabel,
    auxiliary: PegLabel,
}

impl PegAssignment {
    /// Disks start on A, finish on C, with B as the spare.
    pub const CANONICAL: PegAssignment = PegAssignment {
        source: PegLabel::A,
        destination: PegLabel::C,
        auxiliary: PegLabel::B,
    };

    /// Creates an assignment of three distinct pegs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicatePeg`] if a peg is given two roles.
    #[instrument]
    pub fn new(
        source: PegLabel,
        destination: PegLabel,
        auxiliary: PegLabel,
    ) -> Result<Self, ConfigurationError> {
        if source == destination || source == auxiliary {
            return Err(ConfigurationError::DuplicatePeg(source));
        }
        if destination == auxiliary {
            return Err(ConfigurationError::DuplicatePeg(destination));
        }
        Ok(Self {
            source,
            destination,
            auxiliary,
        })
    }

    /// Peg holding every disk at the start.
    pub fn source(&self) -> PegLabel {
        self.source
    }

    /// Peg that must hold every disk at the end.
    pub fn destination(&self) -> PegLabel {
        self.destination
    }

    /// Spare peg.
    pub fn auxiliary(&self) -> PegLabel {
        self.auxiliary
    }
}

impl Default for PegAssignment {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Checks that a disk count lies in `MIN_DISKS..=MAX_DISKS`.
///
/// # Errors
///
/// Returns [`ConfigurationError::DiskCountOutOfRange`] otherwise.
#[instrument]
pub fn validate_disk_count(disks: u8) -> Result<u8, ConfigurationError> {
    if (MIN_DISKS..=MAX_DISKS).contains(&disks) {
        Ok(disks)
    } else {
        Err(ConfigurationError::DiskCountOutOfRange {
            requested: disks,
            min: MIN_DISKS,
            max: MAX_DISKS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_ignores_case_and_whitespace() {
        assert_eq!(PegLabel::parse(" b "), Ok(PegLabel::B));
        assert_eq!("c".parse::<PegLabel>(), Ok(PegLabel::C));
    }

    #[test]
    fn test_parse_unknown_label() {
        assert_eq!(
            PegLabel::parse("D"),
            Err(ConfigurationError::UnknownPeg("D".to_string()))
        );
    }

    #[test]
    fn test_label_indices_follow_all() {
        for (i, label) in PegLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn test_assignment_rejects_duplicates() {
        assert_eq!(
            PegAssignment::new(PegLabel::A, PegLabel::A, PegLabel::B),
            Err(ConfigurationError::DuplicatePeg(PegLabel::A))
        );
        assert_eq!(
            PegAssignment::new(PegLabel::A, PegLabel::B, PegLabel::B),
            Err(ConfigurationError::DuplicatePeg(PegLabel::B))
        );
    }

    #[test]
    fn test_disk_count_range() {
        assert!(validate_disk_count(0).is_err());
        assert_eq!(validate_disk_count(1), Ok(1));
        assert_eq!(validate_disk_count(MAX_DISKS), Ok(MAX_DISKS));
        assert!(validate_disk_count(MAX_DISKS + 1).is_err());
    }

    #[test]
    fn test_disks_order_by_size() {
        assert!(Disk::new(1) < Disk::new(2));
        assert_eq!(Disk::new(3).to_string(), "3");
    }
}
