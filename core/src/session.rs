use roshambo_common::game::{Move, Round, Tally};
use tracing::debug;

use crate::selector::MoveSource;

/// One sitting at the table: a move source, the running tally and every
/// round played so far.
///
/// The tally is only ever advanced by [`Session::play`], which also appends
/// to the history, so `tally().rounds()` and `history().len()` never drift apart.
pub struct Session<S: MoveSource> {
    source: S,
    tally: Tally,
    history: Vec<Round>,
}

impl<S: MoveSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            tally: Tally::default(),
            history: Vec::new(),
        }
    }

    /// Plays one round: draws the computer's move, resolves it against
    /// `player` and records the result.
    pub fn play(&mut self, player: Move) -> Round {
        let computer = self.source.next_move();
        let round = Round::new(self.history.len() + 1, player, computer);
        self.tally = self.tally.apply(round.outcome);

        debug!(
            number = round.number,
            %player,
            %computer,
            outcome = %round.outcome,
            "round resolved"
        );

        self.history.push(round);
        round
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    pub fn last_round(&self) -> Option<&Round> {
        self.history.last()
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }
}
