use crate::game::outcome::Outcome;

/// Running score of a session.
///
/// Starts at zero and only ever moves forward one outcome at a time, so
/// the three counters always add up to the number of rounds played.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub player_wins: u64,
    pub computer_wins: u64,
    pub ties: u64,
}

impl Tally {
    pub fn new(player_wins: u64, computer_wins: u64, ties: u64) -> Self {
        Self {
            player_wins,
            computer_wins,
            ties,
        }
    }

    /// Returns the tally with the counter matching `outcome` bumped by one.
    #[must_use]
    pub fn apply(self, outcome: Outcome) -> Tally {
        match outcome {
            Outcome::PlayerWin => Tally {
                player_wins: self.player_wins + 1,
                ..self
            },
            Outcome::ComputerWin => Tally {
                computer_wins: self.computer_wins + 1,
                ..self
            },
            Outcome::Tie => Tally {
                ties: self.ties + 1,
                ..self
            },
        }
    }

    pub fn rounds(&self) -> u64 {
        self.player_wins + self.computer_wins + self.ties
    }
}

/// Free-standing form of [`Tally::apply`].
#[must_use]
pub fn apply(tally: Tally, outcome: Outcome) -> Tally {
    tally.apply(outcome)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
