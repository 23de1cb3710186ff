//! Game state machine for the Tower of Hanoi.
//!
//! [`GameState`] owns the three pegs and is the only place a move is applied.
//! Manual play, stepped replay and instant solving all go through
//! [`GameState::apply_move`], which checks the [`MoveContract`].
//!
//! # Plans and manual moves
//!
//! A plan always describes a solve from the starting position. The game
//! tracks where the plan expects the pegs to be; once they differ, for
//! instance after a manual move, the plan is diverged
//! ([`GameState::is_plan_diverged`]). A diverged plan is never invalidated
//! automatically: later planned moves are checked against the pegs as they
//! are and rejected one at a time if illegal. [`GameState::reset`] followed
//! by [`GameState::generate_plan`] gets back on track;
//! [`GameState::instant_solve`] does that by itself.

use crate::action::{Move, MoveError, MoveRequest};
use crate::contracts::{Contract, MoveContract};
use crate::error::{ConfigurationError, HanoiError};
use crate::peg::Peg;
use crate::rules;
use crate::snapshot::{GameSnapshot, PegSnapshot};
use crate::solver::{self, Plan};
use crate::towers::Towers;
use crate::types::{PegAssignment, PegLabel, validate_disk_count};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Where the game is in its lifecycle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
)]
pub enum PlayState {
    /// No plan has been generated.
    #[default]
    Idle,
    /// A plan exists and nothing is being replayed.
    PlanReady,
    /// Planned moves are being dispensed.
    Replaying,
    /// Every disk is on the destination peg.
    Completed,
}

/// Complete state of one puzzle session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) towers: Towers,
    disks: u8,
    assignment: PegAssignment,
    plan: Option<Arc<Plan>>,
    cursor: usize,
    pending: Option<Move>,
    pub(crate) steps_taken: u64,
    min_steps: u64,
    play_state: PlayState,
    history: Vec<Move>,
    /// Where the plan expects the pegs to be before its next move.
    track: Option<Towers>,
}

// ─────────────────────────────────────────────────────────────
//  Construction and reset
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Creates a game with `disks` disks on A, to be moved to C.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DiskCountOutOfRange`] for an unsupported
    /// disk count.
    #[instrument]
    pub fn new(disks: u8) -> Result<Self, ConfigurationError> {
        Self::with_assignment(disks, PegAssignment::CANONICAL)
    }

    /// Creates a game using the given peg roles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DiskCountOutOfRange`] for an unsupported
    /// disk count.
    #[instrument]
    pub fn with_assignment(
        disks: u8,
        assignment: PegAssignment,
    ) -> Result<Self, ConfigurationError> {
        let disks = validate_disk_count(disks)?;
        Ok(Self::fresh(disks, assignment))
    }

    fn fresh(disks: u8, assignment: PegAssignment) -> Self {
        Self {
            towers: Towers::stacked(disks, assignment.source()),
            disks,
            assignment,
            plan: None,
            cursor: 0,
            pending: None,
            steps_taken: 0,
            min_steps: solver::min_steps(disks),
            play_state: PlayState::Idle,
            history: Vec::new(),
            track: None,
        }
    }

    /// Restarts with `disks` disks stacked on the source peg.
    ///
    /// Clears the plan, history and step counter. On error the game is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DiskCountOutOfRange`] for an unsupported
    /// disk count.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, disks: u8) -> Result<(), ConfigurationError> {
        let disks = validate_disk_count(disks)?;
        *self = Self::fresh(disks, self.assignment);
        info!(disks, min_steps = self.min_steps, "Game initialized");
        Ok(())
    }

    /// Restarts with the current disk count.
    #[instrument(skip(self), fields(disks = self.disks))]
    pub fn reset(&mut self) {
        *self = Self::fresh(self.disks, self.assignment);
        info!("Game reset");
    }
}

// ─────────────────────────────────────────────────────────────
//  Plan and replay
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Computes the plan for the current disk count and peg roles and
    /// rewinds the replay cursor.
    ///
    /// The plan always describes a solve from the starting position, so
    /// calling this twice yields identical plans. If the pegs have left the
    /// starting position the new plan is diverged from the outset; call
    /// [`reset`](Self::reset) first to replay it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the solver rejects the configuration.
    #[instrument(skip(self), fields(disks = self.disks))]
    pub fn generate_plan(&mut self) -> Result<Arc<Plan>, ConfigurationError> {
        let plan = Arc::new(solver::solve_for(self.disks, self.assignment)?);
        self.plan = Some(Arc::clone(&plan));
        self.cursor = 0;
        self.pending = None;
        self.track = Some(Towers::stacked(self.disks, self.assignment.source()));
        if self.is_plan_diverged() {
            warn!(steps = self.steps_taken, "Plan generated away from the starting position");
        }
        self.play_state = if self.is_completed() {
            PlayState::Completed
        } else {
            PlayState::PlanReady
        };
        debug!(moves = plan.len(), "Plan ready");
        Ok(plan)
    }

    /// Dispenses the next planned move without applying it.
    ///
    /// The move becomes pending: the caller animates it, then applies it with
    /// [`apply_move`](Self::apply_move). Returns `None` when there is no plan
    /// or every planned move has been dispensed.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn next_planned_move(&mut self) -> Option<Move> {
        let Some(next) = self.peek_planned_move() else {
            debug!("Plan exhausted");
            return None;
        };
        self.cursor += 1;
        self.pending = Some(next);
        self.play_state = PlayState::Replaying;
        Some(next)
    }

    /// The move [`next_planned_move`](Self::next_planned_move) would dispense.
    pub fn peek_planned_move(&self) -> Option<Move> {
        self.plan.as_ref()?.get(self.cursor).copied()
    }

    /// Planned moves not yet dispensed.
    pub fn remaining_moves(&self) -> usize {
        self.plan
            .as_ref()
            .map_or(0, |plan| plan.len().saturating_sub(self.cursor))
    }

    /// Stops replaying between moves.
    ///
    /// Drops the pending planned move, if any. The cursor is not rewound, so
    /// dropping a move leaves the plan diverged.
    #[instrument(skip(self))]
    pub fn cancel_replay(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(%pending, "Dropped pending planned move");
            self.advance_track(pending);
        }
        self.play_state = self.resting_state();
    }

    /// Solves the puzzle at once.
    ///
    /// Generates a plan first if there is none. When the pegs are where the
    /// plan expects, the remaining planned moves are applied; otherwise the
    /// game is reset and the whole plan is applied from the start. A game that
    /// is already solved is left alone. Returns the number of moves applied.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::ReplayInProgress`] if a planned move is pending,
    /// or the first rejection from [`apply_move`](Self::apply_move).
    #[instrument(skip(self), fields(disks = self.disks))]
    pub fn instant_solve(&mut self) -> Result<usize, HanoiError> {
        if let Some(pending) = self.pending {
            return Err(MoveError::ReplayInProgress(pending).into());
        }
        if self.is_completed() {
            debug!("Already solved");
            return Ok(0);
        }
        if self.plan.is_none() {
            self.generate_plan()?;
        }
        if self.is_plan_diverged() {
            info!(steps = self.steps_taken, "Pegs are off the plan, restarting");
            self.reset();
            self.generate_plan()?;
        }

        let mut applied = 0;
        while !self.is_completed() {
            let Some(next) = self.next_planned_move() else {
                break;
            };
            if let Err(err) = self.apply_move(next.from(), next.to()) {
                self.cancel_replay();
                return Err(err.into());
            }
            applied += 1;
        }
        self.cancel_replay();

        info!(applied, completed = self.is_completed(), "Instant solve finished");
        Ok(applied)
    }
}

// ─────────────────────────────────────────────────────────────
//  Moves
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Moves the top disk of `from` onto `to`.
    ///
    /// This is the only way pegs change. On success the step counter grows by
    /// one and the applied move is returned; it carries the solver step when
    /// it was the pending planned move. On failure the pegs, steps and
    /// history are unchanged. A rejected pending planned move is consumed.
    ///
    /// # Errors
    ///
    /// - [`MoveError::EmptySource`] if `from` has no disk
    /// - [`MoveError::SamePeg`] if `from == to`
    /// - [`MoveError::LargerOnSmaller`] if `to`'s top disk is not larger
    /// - [`MoveError::ReplayInProgress`] if a different planned move is pending
    #[instrument(skip(self), fields(steps = self.steps_taken))]
    pub fn apply_move(&mut self, from: PegLabel, to: PegLabel) -> Result<Move, MoveError> {
        let request = MoveRequest::new(from, to);

        if let Err(err) = MoveContract::pre(self, &request) {
            if let Some(pending) = self.pending
                && pending.matches(request)
            {
                self.pending = None;
                self.advance_track(pending);
            }
            warn!(%err, "Move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let checkpoint = MoveContract::checkpoint(self);

        let was_on_track = !self.is_plan_diverged();
        let planned = self.pending.take();
        let disk = self
            .towers
            .transfer(from, to)
            .map_err(|_| MoveError::EmptySource(from))?;
        let applied = Move::with_step(disk, request, planned.and_then(|p| p.step()));

        self.steps_taken += 1;
        self.history.push(applied);
        if let Some(planned) = planned {
            self.advance_track(planned);
        }
        if was_on_track && self.is_plan_diverged() {
            debug!("Pegs left the plan");
        }
        self.play_state = self.settled_state();

        #[cfg(debug_assertions)]
        MoveContract::post(&checkpoint, self)?;

        debug!(%applied, steps = self.steps_taken, "Move applied");
        Ok(applied)
    }

    /// True if the destination peg holds every disk.
    pub fn is_completed(&self) -> bool {
        rules::is_complete(&self.towers, self.assignment.destination(), self.disks)
    }

    /// Moves the tracked plan position past a resolved planned move.
    fn advance_track(&mut self, planned: Move) {
        if let Some(track) = self.track.as_mut()
            && track.transfer(planned.from(), planned.to()).is_err()
        {
            warn!(%planned, "Planned move does not fit the plan's own position");
        }
    }

    fn settled_state(&self) -> PlayState {
        match self.play_state {
            _ if self.is_completed() => PlayState::Completed,
            PlayState::Completed => self.resting_state(),
            other => other,
        }
    }

    fn resting_state(&self) -> PlayState {
        if self.is_completed() {
            PlayState::Completed
        } else if self.plan.is_some() {
            PlayState::PlanReady
        } else {
            PlayState::Idle
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Returns the peg with the given label.
    pub fn peg(&self, label: PegLabel) -> &Peg {
        self.towers.peg(label)
    }

    /// All pegs, left to right.
    pub fn pegs(&self) -> &[Peg; 3] {
        self.towers.pegs()
    }

    /// All pegs as one value.
    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Number of disks in play.
    pub fn disks(&self) -> u8 {
        self.disks
    }

    /// Peg roles.
    pub fn assignment(&self) -> PegAssignment {
        self.assignment
    }

    /// Moves applied since the last reset.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Fewest moves that solve the puzzle: `2^n - 1`.
    pub fn min_steps(&self) -> u64 {
        self.min_steps
    }

    /// Current lifecycle state.
    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    /// The current plan, if one was generated.
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_deref()
    }

    /// Index of the next planned move to dispense.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Planned move dispensed but not yet applied.
    pub fn pending_move(&self) -> Option<Move> {
        self.pending
    }

    /// Moves applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True if a plan exists and the pegs are not where it expects them.
    pub fn is_plan_diverged(&self) -> bool {
        self.track.as_ref().is_some_and(|track| *track != self.towers)
    }

    /// Copies everything a UI needs to render the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            disks: self.disks,
            pegs: self
                .pegs()
                .iter()
                .map(|peg| PegSnapshot {
                    label: peg.label(),
                    disks: peg.snapshot(),
                })
                .collect(),
            steps_taken: self.steps_taken,
            min_steps: self.min_steps,
            completed: self.is_completed(),
            play_state: self.play_state,
            cursor: self.cursor,
            plan_len: self.plan.as_ref().map(|plan| plan.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Disk;

    #[test]
    fn test_new_game_starts_idle() {
        let game = GameState::new(3).unwrap();
        assert_eq!(game.play_state(), PlayState::Idle);
        assert_eq!(game.min_steps(), 7);
        assert_eq!(game.steps_taken(), 0);
        assert_eq!(
            game.peg(PegLabel::A).snapshot(),
            vec![Disk::new(3), Disk::new(2), Disk::new(1)]
        );
        assert!(game.plan().is_none());
    }

    #[test]
    fn test_initialize_rejects_zero_and_keeps_state() {
        let mut game = GameState::new(3).unwrap();
        game.apply_move(PegLabel::A, PegLabel::B).unwrap();

        assert!(game.initialize(0).is_err());
        assert_eq!(game.disks(), 3);
        assert_eq!(game.steps_taken(), 1);
    }

    #[test]
    fn test_initialize_changes_disk_count() {
        let mut game = GameState::new(3).unwrap();
        game.generate_plan().unwrap();
        game.initialize(5).unwrap();

        assert_eq!(game.disks(), 5);
        assert_eq!(game.min_steps(), 31);
        assert_eq!(game.peg(PegLabel::A).size(), 5);
        assert!(game.plan().is_none());
        assert_eq!(game.play_state(), PlayState::Idle);
    }

    #[test]
    fn test_next_planned_move_marks_pending() {
        let mut game = GameState::new(2).unwrap();
        assert_eq!(game.next_planned_move(), None);

        game.generate_plan().unwrap();
        assert_eq!(game.play_state(), PlayState::PlanReady);

        let first = game.next_planned_move().unwrap();
        assert_eq!(game.pending_move(), Some(first));
        assert_eq!(game.play_state(), PlayState::Replaying);
        assert_eq!(game.cursor(), 1);
        assert_eq!(game.remaining_moves(), 2);
    }

    #[test]
    fn test_applied_planned_move_keeps_provenance() {
        let mut game = GameState::new(2).unwrap();
        game.generate_plan().unwrap();
        let first = game.next_planned_move().unwrap();

        let applied = game.apply_move(first.from(), first.to()).unwrap();
        assert_eq!(applied, first);
        assert_eq!(game.pending_move(), None);
        assert!(!game.is_plan_diverged());
    }

    #[test]
    fn test_manual_move_rejected_mid_replay() {
        let mut game = GameState::new(2).unwrap();
        game.generate_plan().unwrap();
        game.next_planned_move().unwrap();

        let result = game.apply_move(PegLabel::A, PegLabel::C);
        assert!(matches!(result, Err(MoveError::ReplayInProgress(_))));
        assert_eq!(game.steps_taken(), 0);
        assert!(game.pending_move().is_some());
    }

    #[test]
    fn test_cancel_replay_returns_to_plan_ready() {
        let mut game = GameState::new(3).unwrap();
        game.generate_plan().unwrap();
        game.next_planned_move().unwrap();

        game.cancel_replay();
        assert_eq!(game.pending_move(), None);
        assert_eq!(game.play_state(), PlayState::PlanReady);
        assert_eq!(game.cursor(), 1);
    }

    #[test]
    fn test_leaving_completed_state() {
        let mut game = GameState::new(1).unwrap();
        game.apply_move(PegLabel::A, PegLabel::C).unwrap();
        assert_eq!(game.play_state(), PlayState::Completed);

        game.apply_move(PegLabel::C, PegLabel::B).unwrap();
        assert_eq!(game.play_state(), PlayState::Idle);
        assert!(!game.is_completed());
    }

    #[test]
    fn test_reset_keeps_disk_count() {
        let mut game = GameState::new(4).unwrap();
        game.apply_move(PegLabel::A, PegLabel::B).unwrap();
        game.reset();

        assert_eq!(game.disks(), 4);
        assert_eq!(game.steps_taken(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.peg(PegLabel::A).size(), 4);
    }

    #[test]
    fn test_instant_solve_refuses_while_pending() {
        let mut game = GameState::new(3).unwrap();
        game.generate_plan().unwrap();
        game.next_planned_move().unwrap();

        assert!(matches!(
            game.instant_solve(),
            Err(HanoiError::Move(MoveError::ReplayInProgress(_)))
        ));
    }
}
