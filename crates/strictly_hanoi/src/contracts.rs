//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. [`GameState::apply_move`] checks the precondition on
//! every call and the postcondition in debug builds.

use crate::GameState;
use crate::action::{MoveError, MoveRequest};
use crate::invariants::{HanoiInvariants, InvariantSet};
use crate::rules;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// The postcondition compares against a [`Checkpoint`](Self::Checkpoint)
/// taken before the action, holding only what it needs from the old state.
pub trait Contract<S, A> {
    /// What the postcondition remembers from before the action.
    type Checkpoint;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Records the state the postcondition is checked against.
    fn checkpoint(state: &S) -> Self::Checkpoint;

    /// Checks postconditions after applying the action.
    fn post(before: &Self::Checkpoint, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no other planned move is waiting to be applied.
///
/// Applying the pending planned move itself is allowed.
pub struct NotMidReplay;

impl NotMidReplay {
    /// Rejects a request that differs from the pending planned move.
    #[instrument(skip(game))]
    pub fn check(request: &MoveRequest, game: &GameState) -> Result<(), MoveError> {
        match game.pending_move() {
            Some(pending) if !pending.matches(*request) => {
                Err(MoveError::ReplayInProgress(pending))
            }
            _ => Ok(()),
        }
    }
}

/// Precondition: the move obeys the stacking rule.
pub struct LegalMove;

impl LegalMove {
    /// Validates the request against the current pegs.
    #[instrument(skip(game))]
    pub fn check(request: &MoveRequest, game: &GameState) -> Result<(), MoveError> {
        rules::check_move(game.towers(), *request).map(|_| ())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - No other planned move is pending
/// - The stacking rule holds
///
/// Postconditions:
/// - Exactly one step was added
/// - Pegs descend, disks are conserved, history matches steps
pub struct MoveContract;

impl Contract<GameState, MoveRequest> for MoveContract {
    /// Steps taken before the move.
    type Checkpoint = u64;

    fn pre(game: &GameState, request: &MoveRequest) -> Result<(), MoveError> {
        NotMidReplay::check(request, game)?;
        LegalMove::check(request, game)
    }

    fn checkpoint(game: &GameState) -> u64 {
        game.steps_taken()
    }

    fn post(steps_before: &u64, after: &GameState) -> Result<(), MoveError> {
        if after.steps_taken() != steps_before + 1 {
            warn!(
                before = *steps_before,
                after = after.steps_taken(),
                "Step counter drifted"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: steps taken must grow by one".to_string(),
            ));
        }

        HanoiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
