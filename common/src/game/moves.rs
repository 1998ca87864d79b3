//! # Moves
//!
//! A throw in a round of rock-paper-scissors.
//!
//! Moves can be parsed from user input:
//! * **Names**: "rock", "paper", "scissors" (case-insensitive).
//! * **Shorthand**: "r", "p", "s".

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move: '{input}' (expected rock, paper or scissors)")]
pub struct ParseMoveError {
    pub input: String,
}

impl Move {
    /// Every move, in the order the game presents them.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns `true` when `self` wins against `other`.
    ///
    /// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
    /// A move never beats itself.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// The key that throws this move on the board.
    pub fn hotkey(self) -> char {
        match self {
            Move::Rock => 'r',
            Move::Paper => 'p',
            Move::Scissors => 's',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(ParseMoveError {
                input: s.to_string(),
            }),
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_follows_the_cycle() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(Move::Paper.beats(Move::Rock));

        assert!(!Move::Scissors.beats(Move::Rock));
        assert!(!Move::Paper.beats(Move::Scissors));
        assert!(!Move::Rock.beats(Move::Paper));
    }

    #[test]
    fn no_move_beats_itself() {
        for m in Move::ALL {
            assert!(!m.beats(m), "{m} should not beat itself");
        }
    }

    #[test]
    fn each_move_beats_exactly_one_other() {
        for m in Move::ALL {
            let wins = Move::ALL.iter().filter(|other| m.beats(**other)).count();
            assert_eq!(wins, 1, "{m} beats {wins} moves");
        }
    }

    #[test]
    fn test_from_str_full_parsing() {
        // Names, any case
        assert_eq!(Move::from_str("rock"), Ok(Move::Rock));
        assert_eq!(Move::from_str("PAPER"), Ok(Move::Paper));
        assert_eq!(Move::from_str("Scissors"), Ok(Move::Scissors));

        // Shorthand and surrounding whitespace
        assert_eq!(Move::from_str("r"), Ok(Move::Rock));
        assert_eq!(Move::from_str(" P "), Ok(Move::Paper));
        assert_eq!(Move::from_str("s"), Ok(Move::Scissors));

        // --- Error Cases ---
        assert!(Move::from_str("lizard").is_err());
        assert!(Move::from_str("").is_err());
        assert!(Move::from_str("rocks").is_err());
    }

    #[test]
    fn parse_error_keeps_input() {
        let err = "spock".parse::<Move>().unwrap_err();
        assert_eq!(err.input, "spock");
        assert_eq!(
            err.to_string(),
            "invalid move: 'spock' (expected rock, paper or scissors)"
        );
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Move::Rock.to_string(), "Rock");
        assert_eq!(Move::Paper.to_string(), "Paper");
        assert_eq!(Move::Scissors.to_string(), "Scissors");
    }

    #[test]
    fn hotkeys_parse_back() {
        for m in Move::ALL {
            assert_eq!(m.hotkey().to_string().parse::<Move>(), Ok(m));
        }
    }
}
