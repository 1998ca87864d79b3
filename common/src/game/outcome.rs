use std::fmt;

use crate::game::moves::Move;

/// Result of a single round, always from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

impl Outcome {
    /// The same round seen from the other side of the table.
    pub fn reversed(self) -> Outcome {
        match self {
            Outcome::PlayerWin => Outcome::ComputerWin,
            Outcome::ComputerWin => Outcome::PlayerWin,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::PlayerWin => "Player Wins",
            Outcome::ComputerWin => "Computer Wins",
            Outcome::Tie => "Tie",
        };
        f.write_str(text)
    }
}

/// Decides a round. Total over all nine pairs of moves.
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::PlayerWin
    } else {
        Outcome::ComputerWin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    #[test]
    fn same_moves_tie() {
        for m in Move::ALL {
            assert_eq!(resolve(m, m), Outcome::Tie);
        }
    }

    #[test]
    fn winning_pairs() {
        assert_eq!(resolve(Rock, Scissors), Outcome::PlayerWin);
        assert_eq!(resolve(Paper, Rock), Outcome::PlayerWin);
        assert_eq!(resolve(Scissors, Paper), Outcome::PlayerWin);
    }

    #[test]
    fn losing_pairs() {
        assert_eq!(resolve(Scissors, Rock), Outcome::ComputerWin);
        assert_eq!(resolve(Rock, Paper), Outcome::ComputerWin);
        assert_eq!(resolve(Paper, Scissors), Outcome::ComputerWin);
    }

    #[test]
    fn swapping_sides_reverses_outcome() {
        for a in Move::ALL {
            for b in Move::ALL {
                let forward = resolve(a, b);
                let backward = resolve(b, a);
                assert_eq!(forward.reversed(), backward, "{a} vs {b}");
                if a != b {
                    assert_ne!(forward, Outcome::Tie);
                    assert_ne!(forward, backward);
                }
            }
        }
    }

    #[test]
    fn display_uses_log_text() {
        assert_eq!(Outcome::PlayerWin.to_string(), "Player Wins");
        assert_eq!(Outcome::ComputerWin.to_string(), "Computer Wins");
        assert_eq!(Outcome::Tie.to_string(), "Tie");
    }
}
