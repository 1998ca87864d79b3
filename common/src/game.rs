//! # Game Rules
//!
//! Everything needed to play one round and keep score across a session.
//!
//! * [`moves::Move`]: what a player throws.
//! * [`outcome::Outcome`] and [`outcome::resolve`]: who won a round.
//! * [`tally::Tally`] and [`tally::apply`]: the running score.
//! * [`round::Round`]: one finished round, as shown in the results log.

pub mod moves;
pub mod outcome;
pub mod round;
pub mod tally;

pub use moves::{Move, ParseMoveError};
pub use outcome::{Outcome, resolve};
pub use round::Round;
pub use tally::{Tally, apply};
