use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    event::{self, Event},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use roshambo_common::config::Config;
use roshambo_common::game::Move;
use roshambo_core::{MoveSource, Session};
use tracing::{debug, info};

use crate::commands;
use crate::terminal::board;
use crate::terminal::input::{self, Action, TerminalGuard};

enum Flow {
    Continue,
    Exit,
}

pub fn play(cfg: &Config) -> anyhow::Result<()> {
    let mut session = Session::new(commands::computer(cfg));

    info!("diagnostics are paused while the board is open");
    {
        let mut terminal = TerminalGuard::enter()?;
        draw(terminal.out(), &session, cfg)?;

        loop {
            let flow = match event::read()? {
                Event::Key(key_event) => match input::action_for(key_event) {
                    Some(action) => dispatch(action, &mut session),
                    None => continue,
                },
                Event::Resize(..) => Flow::Continue,
                _ => continue,
            };

            match flow {
                Flow::Continue => draw(terminal.out(), &session, cfg)?,
                Flow::Exit => break,
            }
        }
    }

    debug!(rounds = session.rounds_played(), "board closed");
    board::print_summary(session.tally(), cfg.quiet);
    Ok(())
}

fn dispatch<S: MoveSource>(action: Action, session: &mut Session<S>) -> Flow {
    match action {
        Action::Throw(player) => on_throw(session, player),
        Action::Quit => on_quit(),
    }
}

fn on_throw<S: MoveSource>(session: &mut Session<S>, player: Move) -> Flow {
    session.play(player);
    Flow::Continue
}

fn on_quit() -> Flow {
    Flow::Exit
}

fn draw<S: MoveSource>(out: &mut impl Write, session: &Session<S>, cfg: &Config) -> anyhow::Result<()> {
    let lines = board::render(session.tally(), session.history(), cfg.log_rows);

    queue!(out, Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    out.flush()?;
    Ok(())
}
