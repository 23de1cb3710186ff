//! Cooperative automatic replay of a plan.
//!
//! [`auto_replay`] drains the plan one move at a time: request the next move,
//! await the caller's animation, apply the move. It suspends only inside
//! [`Animator::animate`], so the engine itself needs no timer.

use crate::GameState;
use crate::action::Move;
use crate::error::HanoiError;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, instrument};

/// Presentation hooks driven by [`auto_replay`].
#[async_trait]
pub trait Animator: Send {
    /// Animates `mv` before it is applied. Replay resumes when this returns.
    async fn animate(&mut self, mv: &Move);

    /// Called after `mv` has been applied to `game`.
    fn on_applied(&mut self, _mv: &Move, _game: &GameState) {}
}

/// Flag that stops a running replay before its next move.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. A move already in flight still completes.
    #[instrument(skip(self))]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// True once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Clears the flag so the token can be reused.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

/// Why a replay stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayOutcome {
    /// Every disk reached the destination.
    Completed,
    /// The cancel token was set.
    Cancelled,
    /// The plan ran out before the puzzle was complete.
    Exhausted,
}

/// Result of one [`auto_replay`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayReport {
    /// Why the replay stopped.
    pub outcome: ReplayOutcome,
    /// Moves applied during this run.
    pub applied: usize,
}

/// Replays the plan until completion, exhaustion or cancellation.
///
/// Generates a plan if the game has none. A planned move left pending by
/// stepped replay is animated and applied first. The game is returned to a
/// resting state when the replay stops.
///
/// # Errors
///
/// Returns the first rejected move, or a configuration error from plan
/// generation.
#[instrument(skip(game, animator, cancel), fields(disks = game.disks()))]
pub async fn auto_replay<A>(
    game: &mut GameState,
    animator: &mut A,
    cancel: &CancelToken,
) -> Result<ReplayReport, HanoiError>
where
    A: Animator + ?Sized,
{
    if game.plan().is_none() {
        game.generate_plan()?;
    }

    let mut applied = 0;
    let outcome = loop {
        if cancel.is_cancelled() {
            debug!(applied, "Replay cancelled");
            break ReplayOutcome::Cancelled;
        }
        if game.is_completed() {
            break ReplayOutcome::Completed;
        }

        let next = match game.pending_move() {
            Some(pending) => pending,
            None => match game.next_planned_move() {
                Some(next) => next,
                None => break ReplayOutcome::Exhausted,
            },
        };

        animator.animate(&next).await;

        match game.apply_move(next.from(), next.to()) {
            Ok(mv) => {
                applied += 1;
                animator.on_applied(&mv, game);
            }
            Err(err) => {
                game.cancel_replay();
                return Err(err.into());
            }
        }
    };

    game.cancel_replay();
    info!(?outcome, applied, "Replay stopped");
    Ok(ReplayReport { outcome, applied })
}
