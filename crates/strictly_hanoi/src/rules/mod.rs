//! Game rules for the Tower of Hanoi.
//!
//! Pure functions over [`Towers`](crate::Towers). Rules are kept apart from
//! peg storage so the contract layer can compose them.

pub mod completion;
pub mod legality;

pub use completion::is_complete;
pub use legality::check_move;
