#![cfg(test)]
use roshambo_common::game::{Move, Outcome, Tally, apply, resolve};
use roshambo_core::{MoveSource, RandomMoves, ScriptedMoves, Session};

/// Plays every player move against every computer move once and checks the
/// session agrees with resolving and tallying the pairs by hand.
#[test]
fn full_grid_session_matches_rules() {
    let mut computer_moves = Vec::new();
    let mut player_moves = Vec::new();
    for player in Move::ALL {
        for computer in Move::ALL {
            player_moves.push(player);
            computer_moves.push(computer);
        }
    }

    let computer = ScriptedMoves::new(computer_moves.clone()).unwrap();
    let mut session = Session::new(computer);
    for player in &player_moves {
        session.play(*player);
    }

    let expected = player_moves
        .iter()
        .zip(&computer_moves)
        .map(|(p, c)| resolve(*p, *c))
        .fold(Tally::default(), apply);

    assert_eq!(session.tally(), expected);
    assert_eq!(session.tally(), Tally::new(3, 3, 3));
    assert_eq!(session.rounds_played(), 9);
}

#[test]
fn log_lines_describe_each_round() {
    let computer = ScriptedMoves::new(vec![Move::Scissors, Move::Rock, Move::Paper]).unwrap();
    let mut session = Session::new(computer);
    for _ in 0..3 {
        session.play(Move::Rock);
    }

    let log: Vec<String> = session.history().iter().map(|r| r.to_string()).collect();
    assert_eq!(
        log,
        vec![
            "#1 Rock vs Scissors: Player Wins",
            "#2 Rock vs Rock: Tie",
            "#3 Rock vs Paper: Computer Wins",
        ]
    );
}

#[test]
fn seeded_sessions_replay_identically() {
    let player_moves = [Move::Rock, Move::Paper, Move::Scissors, Move::Paper, Move::Rock];

    let mut first = Session::new(RandomMoves::seeded(1234));
    let mut second = Session::new(RandomMoves::seeded(1234));
    for player in player_moves {
        first.play(player);
        second.play(player);
    }

    assert_eq!(first.history(), second.history());
    assert_eq!(first.tally(), second.tally());
}

#[test]
fn long_random_session_keeps_counts_consistent() {
    let mut session = Session::new(RandomMoves::seeded(99));
    let mut player = ScriptedMoves::new(Move::ALL.to_vec()).unwrap();

    for _ in 0..1000 {
        session.play(player.next_move());
    }

    let tally = session.tally();
    assert_eq!(tally.rounds(), 1000);
    assert_eq!(session.history().len(), 1000);

    let player_wins = session
        .history()
        .iter()
        .filter(|r| r.outcome == Outcome::PlayerWin)
        .count() as u64;
    assert_eq!(tally.player_wins, player_wins);
    // Uniform opponent: every outcome shows up a fair number of times.
    assert!(tally.player_wins > 200 && tally.computer_wins > 200 && tally.ties > 200);
}
