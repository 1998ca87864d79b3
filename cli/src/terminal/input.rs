use std::io::{self, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use roshambo_common::game::Move;

use crate::terminal::logging;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Throw(Move),
    Quit,
}

/// Maps a key press to an [`Action`]. Releases, repeats and unbound keys map to `None`.
pub fn action_for(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let is_ctrl_c = key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL);
    if is_ctrl_c {
        return Some(Action::Quit);
    }
    if key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('1') => Some(Action::Throw(Move::Rock)),
        KeyCode::Char('2') => Some(Action::Throw(Move::Paper)),
        KeyCode::Char('3') => Some(Action::Throw(Move::Scissors)),
        KeyCode::Char(c) => Move::ALL
            .into_iter()
            .find(|m| m.hotkey() == c.to_ascii_lowercase())
            .map(Action::Throw),
        _ => None,
    }
}

/// Holds the terminal in raw mode on the alternate screen until dropped.
///
/// Diagnostics are paused for as long as the guard lives.
pub struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        logging::pause_diagnostics(true);
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        logging::pause_diagnostics(false);
    }
}
