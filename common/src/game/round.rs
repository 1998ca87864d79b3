use std::fmt;

use crate::game::moves::Move;
use crate::game::outcome::{Outcome, resolve};

/// A finished round as it appears in the results log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// 1-based position in the session.
    pub number: usize,
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

impl Round {
    pub fn new(number: usize, player: Move, computer: Move) -> Self {
        Self {
            number,
            player,
            computer,
            outcome: resolve(player, computer),
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} vs {}: {}",
            self.number, self.player, self.computer, self.outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_resolves_outcome() {
        let round = Round::new(1, Move::Paper, Move::Scissors);
        assert_eq!(round.outcome, Outcome::ComputerWin);
    }

    #[test]
    fn log_line() {
        let round = Round::new(3, Move::Rock, Move::Scissors);
        assert_eq!(round.to_string(), "#3 Rock vs Scissors: Player Wins");

        let round = Round::new(12, Move::Paper, Move::Paper);
        assert_eq!(round.to_string(), "#12 Paper vs Paper: Tie");
    }
}
