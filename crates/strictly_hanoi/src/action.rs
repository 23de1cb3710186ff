//! First-class action types for the Tower of Hanoi.
//!
//! A [`MoveRequest`] is what a player asks for; a [`Move`] is what the solver
//! plans or what the game actually applied. Both are plain values that can be
//! validated, logged and replayed independently of execution.

use crate::types::{Disk, PegLabel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Intent to move the top disk of `from` onto `to`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_new::new,
)]
pub struct MoveRequest {
    /// Peg to take the top disk from.
    pub from: PegLabel,
    /// Peg to place the disk on.
    pub to: PegLabel,
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Which branch of the recursive solver emitted a move.
///
/// Only used to highlight the matching line of the algorithm in a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SolverStep {
    /// `n == 1`: the single disk goes straight to the destination.
    BaseCase,
    /// `n > 1`: the largest disk goes to the destination between the two
    /// recursive calls.
    MoveLargest,
}

impl SolverStep {
    /// Line of the recursive pseudo-code this step corresponds to.
    pub fn line(self) -> u8 {
        match self {
            SolverStep::BaseCase => 2,
            SolverStep::MoveLargest => 5,
        }
    }
}

/// One relocation of a disk from one peg to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    disk: Disk,
    from: PegLabel,
    to: PegLabel,
    step: Option<SolverStep>,
}

impl Move {
    /// Creates a move with no solver provenance.
    pub fn new(disk: Disk, from: PegLabel, to: PegLabel) -> Self {
        Self {
            disk,
            from,
            to,
            step: None,
        }
    }

    /// Creates a move emitted by the given solver step.
    pub fn planned(disk: Disk, from: PegLabel, to: PegLabel, step: SolverStep) -> Self {
        Self {
            disk,
            from,
            to,
            step: Some(step),
        }
    }

    pub(crate) fn with_step(disk: Disk, request: MoveRequest, step: Option<SolverStep>) -> Self {
        Self {
            disk,
            from: request.from,
            to: request.to,
            step,
        }
    }

    /// The disk being moved.
    pub fn disk(&self) -> Disk {
        self.disk
    }

    /// Source peg.
    pub fn from(&self) -> PegLabel {
        self.from
    }

    /// Destination peg.
    pub fn to(&self) -> PegLabel {
        self.to
    }

    /// Solver provenance, if this move came from a plan.
    pub fn step(&self) -> Option<SolverStep> {
        self.step
    }

    /// The `(from, to)` pair of this move.
    pub fn request(&self) -> MoveRequest {
        MoveRequest::new(self.from, self.to)
    }

    /// True if this move goes between the same pegs as `request`.
    pub fn matches(&self, request: MoveRequest) -> bool {
        self.request() == request
    }

    /// Sentence describing the move, e.g. "Move disk 2 from A to C".
    pub fn description(&self) -> String {
        format!("Move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "disk {}: {} -> {}", self.disk, self.from, self.to)
    }
}

/// Why a move was rejected.
///
/// Rejections are recoverable: the game state is left untouched and the
/// caller decides how to report them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The source peg has no disk.
    #[display("Peg {} has no disk to move", _0)]
    EmptySource(PegLabel),

    /// Source and destination are the same peg.
    #[display("Cannot move a disk from peg {} onto itself", _0)]
    SamePeg(PegLabel),

    /// The moving disk is not smaller than the destination's top disk.
    #[display("Cannot place disk {} on disk {} (peg {})", disk, onto, to)]
    LargerOnSmaller {
        /// Disk being moved.
        disk: Disk,
        /// Top disk of the destination.
        onto: Disk,
        /// Destination peg.
        to: PegLabel,
    },

    /// A planned move has been dispensed and not yet applied.
    #[display("Planned move ({}) is still being replayed", _0)]
    ReplayInProgress(Move),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
