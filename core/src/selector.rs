//! The computer's side of the table.
//!
//! [`MoveSource`] is the **abstraction** every opponent implements. The game only
//! ever asks it for the next move, so tests can swap the random opponent for a
//! scripted one without touching the round logic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roshambo_common::game::Move;
use thiserror::Error;
use tracing::trace;

/// Produces the computer's move for each round.
pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}

impl<F> MoveSource for F
where
    F: FnMut() -> Move,
{
    fn next_move(&mut self) -> Move {
        self()
    }
}

/// Picks uniformly from [`Move::ALL`], independently every round.
pub struct RandomMoves<R = StdRng> {
    rng: R,
}

impl RandomMoves<StdRng> {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Same seed, same sequence of moves.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomMoves<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomMoves<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn next_move(&mut self) -> Move {
        let idx = self.rng.random_range(0..Move::ALL.len());
        trace!(idx, "drew computer move");
        Move::ALL[idx]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("a move script needs at least one move")]
    Empty,
}

/// Replays a fixed list of moves, starting over once it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedMoves {
    pub fn new(moves: Vec<Move>) -> Result<Self, ScriptError> {
        if moves.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self { moves, cursor: 0 })
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let m = self.moves[self.cursor];
        self.cursor = (self.cursor + 1) % self.moves.len();
        m
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
