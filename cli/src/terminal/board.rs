//! The game window: options row, stats panel and results log.
//!
//! Everything here builds strings; drawing them is up to the caller, so the
//! same panels back both the interactive board and the end-of-session summary.

use colored::*;
use roshambo_common::game::{Move, Outcome, Round, Tally};

use crate::terminal::{colors, print};

const STAT_KEYS: [&str; 3] = ["Player Wins", "Computer Wins", "Ties"];

pub fn render(tally: Tally, history: &[Round], log_rows: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    lines.push(print::header_line("rock paper scissors game"));
    lines.push(String::new());

    lines.push(print::header_line("game options"));
    lines.push(options_line());
    lines.push(String::new());

    lines.push(print::header_line("game stats"));
    lines.extend(stats_lines(tally));
    lines.push(String::new());

    lines.push(print::header_line("results"));
    if history.is_empty() {
        lines.push(print::status_line("No rounds played yet".italic().to_string()));
    } else {
        let skip = history.len().saturating_sub(log_rows);
        lines.extend(history[skip..].iter().map(round_line));
    }

    lines.push(print::fat_separator_line());
    lines
}

fn options_line() -> String {
    let mut buttons: Vec<String> = Move::ALL
        .iter()
        .map(|m| button(m.hotkey(), m.name()))
        .collect();
    buttons.push(button('q', "Quit"));
    format!(" {}", buttons.join("  "))
}

fn button(key: char, label: &str) -> String {
    format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        key.to_string().color(colors::ACCENT).bold(),
        "]".color(colors::SEPARATOR),
        label.color(colors::TEXT_DEFAULT)
    )
}

fn stats_lines(tally: Tally) -> Vec<String> {
    print::set_key_width(STAT_KEYS);
    let values = [tally.player_wins, tally.computer_wins, tally.ties];
    STAT_KEYS
        .iter()
        .zip(values)
        .map(|(key, value)| print::status_line(print::aligned(key, value.to_string())))
        .collect()
}

/// One results-log line, colored by who took the round.
pub fn round_line(round: &Round) -> String {
    let color = match round.outcome {
        Outcome::PlayerWin => colors::PLAYER_WIN,
        Outcome::ComputerWin => colors::COMPUTER_WIN,
        Outcome::Tie => colors::TIE,
    };
    print::status_line(round.to_string().color(color).to_string())
}

pub fn print_summary(tally: Tally, q_level: u8) {
    print::print_lines(&summary_lines(tally, q_level));
}

/// Closing stats. Quiet output keeps only the three stat lines.
pub fn summary_lines(tally: Tally, q_level: u8) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if q_level == 0 {
        lines.push(String::new());
        lines.push(print::header_line("session summary"));
    }
    lines.extend(stats_lines(tally));
    if q_level == 0 {
        lines.push(print::fat_separator_line());
        let rounds: ColoredString = format!("{} rounds", tally.rounds()).bold().green();
        let closing = format!("Session over: {rounds} played")
            .color(colors::TEXT_DEFAULT)
            .to_string();
        lines.push(print::centered(&closing));
        lines.push(print::fat_separator_line());
    }
    lines
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
