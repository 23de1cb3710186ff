//! The stacking rule.

use crate::action::{MoveError, MoveRequest};
use crate::towers::Towers;
use crate::types::Disk;
use tracing::instrument;

/// Checks whether the top disk of `request.from` may go onto `request.to`.
///
/// A disk may be placed only on an empty peg or on a strictly larger disk.
/// Returns the disk that would move.
///
/// # Errors
///
/// Returns [`MoveError::SamePeg`], [`MoveError::EmptySource`] or
/// [`MoveError::LargerOnSmaller`].
#[instrument(skip(towers))]
pub fn check_move(towers: &Towers, request: MoveRequest) -> Result<Disk, MoveError> {
    if request.from == request.to {
        return Err(MoveError::SamePeg(request.from));
    }

    let disk = towers
        .peg(request.from)
        .peek_top()
        .ok_or(MoveError::EmptySource(request.from))?;

    if let Some(onto) = towers.peg(request.to).peek_top()
        && onto <= disk
    {
        return Err(MoveError::LargerOnSmaller {
            disk,
            onto,
            to: request.to,
        });
    }

    Ok(disk)
}
