use roshambo_common::config::Config;
use roshambo_common::game::Move;
use roshambo_core::{MoveSource, Session};
use tracing::info_span;

use crate::commands;
use crate::terminal::{board, print};

pub fn throw(moves: Vec<Move>, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("throw", rounds = moves.len());
    let _guard = span.enter();

    let lines = throw_lines(&moves, commands::computer(cfg), cfg);
    print::print_lines(&lines);
    Ok(())
}

/// Plays `moves` against `computer` and returns what gets printed.
///
/// `-q` drops the header, `-qq` also drops the per-round lines.
fn throw_lines<S: MoveSource>(moves: &[Move], computer: S, cfg: &Config) -> Vec<String> {
    let mut session = Session::new(computer);
    let mut lines: Vec<String> = Vec::new();

    if cfg.quiet == 0 {
        lines.push(print::header_line("results"));
    }

    for player in moves {
        let round = session.play(*player);
        if cfg.quiet < 2 {
            lines.push(board::round_line(&round));
        }
    }

    lines.extend(board::summary_lines(session.tally(), cfg.quiet));
    lines
}
