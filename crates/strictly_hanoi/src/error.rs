//! Error types shared across the engine.

use crate::action::MoveError;
use crate::types::PegLabel;

/// Invalid disk count or peg configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigurationError {
    /// Disk count lies outside the supported range.
    #[display("Disk count {} is outside the supported range {}..={}", requested, min, max)]
    DiskCountOutOfRange {
        /// Count that was asked for.
        requested: u8,
        /// Smallest supported count.
        min: u8,
        /// Largest supported count.
        max: u8,
    },

    /// A peg label other than A, B or C.
    #[display("Unknown peg {:?} (expected A, B or C)", _0)]
    UnknownPeg(String),

    /// The same peg was given two roles.
    #[display("Peg {} is assigned more than one role", _0)]
    DuplicatePeg(PegLabel),
}

impl std::error::Error for ConfigurationError {}

/// Popping a peg that holds no disks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PegError {
    /// The peg has no disks.
    #[display("Peg {} has no disks", _0)]
    Empty(PegLabel),
}

impl std::error::Error for PegError {}

/// Any failure the engine can report.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum HanoiError {
    /// A move was rejected.
    #[display("{}", _0)]
    Move(MoveError),
    /// A peg was popped while empty.
    #[display("{}", _0)]
    Peg(PegError),
    /// Disk count or peg configuration was invalid.
    #[display("{}", _0)]
    Configuration(ConfigurationError),
}

impl std::error::Error for HanoiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HanoiError::Move(e) => Some(e),
            HanoiError::Peg(e) => Some(e),
            HanoiError::Configuration(e) => Some(e),
        }
    }
}
