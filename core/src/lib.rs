//! # Roshambo Core
//!
//! Runs the game on top of the rules in `roshambo_common`.
//!
//! * **[`selector`]**: the computer opponent, behind the [`selector::MoveSource`] port.
//! * **[`session`]**: ties an opponent to a tally and a round history.

pub mod selector;
pub mod session;

pub use selector::{MoveSource, RandomMoves, ScriptError, ScriptedMoves};
pub use session::Session;
