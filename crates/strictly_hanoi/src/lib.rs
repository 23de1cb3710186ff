//! Strictly Hanoi - contract-checked Tower of Hanoi engine.
//!
//! # Architecture
//!
//! - **Peg**: LIFO stack of disks
//! - **Solver**: pure recursive planner producing `2^n - 1` moves
//! - **GameState**: owns the pegs, validates and applies every move, and
//!   dispenses planned moves for stepped, automatic or instant play
//! - **Replay**: cooperative auto-play driven by a caller-supplied animator
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{GameState, PegLabel};
//!
//! # fn main() -> Result<(), strictly_hanoi::HanoiError> {
//! let mut game = GameState::new(3)?;
//! game.generate_plan()?;
//!
//! while let Some(next) = game.next_planned_move() {
//!     // animate here, then apply
//!     game.apply_move(next.from(), next.to())?;
//! }
//!
//! assert!(game.is_completed());
//! assert_eq!(game.steps_taken(), game.min_steps());
//! assert_eq!(game.peg(PegLabel::C).size(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod error;
mod game;
pub mod invariants;
mod peg;
mod replay;
pub mod rules;
mod snapshot;
mod solver;
mod speed;
mod towers;
mod types;

// Crate-level exports - Domain types
pub use types::{
    DEFAULT_DISKS, Disk, MAX_DISKS, MIN_DISKS, PegAssignment, PegLabel, validate_disk_count,
};

// Crate-level exports - Pegs
pub use peg::Peg;
pub use towers::Towers;

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError, MoveRequest, SolverStep};
pub use error::{ConfigurationError, HanoiError, PegError};

// Crate-level exports - Solver
pub use solver::{Plan, min_steps, solve, solve_for};

// Crate-level exports - Game state
pub use game::{GameState, PlayState};
pub use snapshot::{GameSnapshot, PegSnapshot};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, LegalMove, MoveContract, NotMidReplay};
pub use invariants::{
    DescendingPegsInvariant, DiskConservationInvariant, HanoiInvariants,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
};

// Crate-level exports - Playback
pub use replay::{Animator, CancelToken, ReplayOutcome, ReplayReport, auto_replay};
pub use speed::AnimationSpeed;
