//! Recursive Tower of Hanoi solver.
//!
//! The solver is pure: it describes the moves that solve a puzzle and never
//! touches live pegs. Plans are executed through
//! [`GameState::apply_move`](crate::GameState::apply_move).

use crate::action::{Move, SolverStep};
use crate::error::ConfigurationError;
use crate::types::{Disk, PegAssignment, PegLabel, validate_disk_count};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The ordered moves of one solver invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Plan {
    disks: u8,
    assignment: PegAssignment,
    moves: Vec<Move>,
}

impl Plan {
    /// Disk count the plan was computed for.
    pub fn disks(&self) -> u8 {
        self.disks
    }

    /// Peg roles the plan was computed for.
    pub fn assignment(&self) -> PegAssignment {
        self.assignment
    }

    /// All moves, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Move at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if the plan has no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates over the moves in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Minimum number of moves for `disks` disks on three pegs: `2^n - 1`.
pub fn min_steps(disks: u8) -> u64 {
    if disks >= 64 {
        u64::MAX
    } else {
        (1u64 << disks) - 1
    }
}

/// Plans the moves that carry `disks` disks from `source` to `destination`.
///
/// The plan has exactly `2^n - 1` moves and is legal when applied in order
/// starting from every disk on `source`, largest at the bottom.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if the disk count is unsupported or the
/// three labels are not distinct.
#[instrument]
pub fn solve(
    disks: u8,
    source: PegLabel,
    destination: PegLabel,
    auxiliary: PegLabel,
) -> Result<Plan, ConfigurationError> {
    let assignment = PegAssignment::new(source, destination, auxiliary)?;
    solve_for(disks, assignment)
}

/// Same as [`solve`] for an existing assignment.
///
/// # Errors
///
/// Returns [`ConfigurationError::DiskCountOutOfRange`] for an unsupported
/// disk count.
#[instrument]
pub fn solve_for(disks: u8, assignment: PegAssignment) -> Result<Plan, ConfigurationError> {
    let disks = validate_disk_count(disks)?;
    let mut moves = Vec::with_capacity(min_steps(disks) as usize);
    plan_into(
        disks,
        assignment.source(),
        assignment.destination(),
        assignment.auxiliary(),
        &mut moves,
    );
    debug!(disks, moves = moves.len(), "Plan generated");
    Ok(Plan {
        disks,
        assignment,
        moves,
    })
}

fn plan_into(
    n: u8,
    source: PegLabel,
    destination: PegLabel,
    auxiliary: PegLabel,
    moves: &mut Vec<Move>,
) {
    if n == 1 {
        moves.push(Move::planned(
            Disk::new(1),
            source,
            destination,
            SolverStep::BaseCase,
        ));
        return;
    }

    plan_into(n - 1, source, auxiliary, destination, moves);
    moves.push(Move::planned(
        Disk::new(n),
        source,
        destination,
        SolverStep::MoveLargest,
    ));
    plan_into(n - 1, auxiliary, destination, source, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_disk_is_base_case() {
        let plan = solve(1, PegLabel::A, PegLabel::C, PegLabel::B).unwrap();
        assert_eq!(
            plan.moves(),
            &[Move::planned(
                Disk::new(1),
                PegLabel::A,
                PegLabel::C,
                SolverStep::BaseCase
            )]
        );
    }

    #[test]
    fn test_largest_disk_moves_in_the_middle() {
        let plan = solve(4, PegLabel::A, PegLabel::C, PegLabel::B).unwrap();
        let middle = plan.get(7).unwrap();
        assert_eq!(middle.disk(), Disk::new(4));
        assert_eq!(middle.request().from, PegLabel::A);
        assert_eq!(middle.request().to, PegLabel::C);
        assert_eq!(middle.step(), Some(SolverStep::MoveLargest));
    }

    #[test]
    fn test_min_steps() {
        assert_eq!(min_steps(0), 0);
        assert_eq!(min_steps(1), 1);
        assert_eq!(min_steps(3), 7);
        assert_eq!(min_steps(10), 1023);
        assert_eq!(min_steps(64), u64::MAX);
    }

    #[test]
    fn test_zero_disks_rejected() {
        assert!(matches!(
            solve(0, PegLabel::A, PegLabel::C, PegLabel::B),
            Err(ConfigurationError::DiskCountOutOfRange { requested: 0, .. })
        ));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        assert_eq!(
            solve(3, PegLabel::A, PegLabel::C, PegLabel::C),
            Err(ConfigurationError::DuplicatePeg(PegLabel::C))
        );
    }

    #[test]
    fn test_plan_records_assignment() {
        let plan = solve(2, PegLabel::B, PegLabel::A, PegLabel::C).unwrap();
        assert_eq!(plan.disks(), 2);
        assert_eq!(plan.assignment().source(), PegLabel::B);
        assert_eq!(plan.assignment().destination(), PegLabel::A);
        assert_eq!((&plan).into_iter().count(), 3);
    }
}
