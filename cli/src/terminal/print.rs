use std::{cell::Cell, fmt::Display};

use crate::terminal::{banner, colors};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target are user output, not diagnostics.
pub const PRINT_TARGET: &str = "roshambo::print";

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        print(line);
    }
}

pub fn banner(no_banner: bool, q_level: u8) {
    print_lines(&banner_lines(no_banner, q_level));
}

/// Version strip and ASCII art, or nothing when the banner is off or output is quiet.
pub fn banner_lines(no_banner: bool, q_level: u8) -> Vec<String> {
    if no_banner || q_level > 0 {
        return Vec::new();
    }

    let text_content: String = format!("⟦ ROSHAMBO v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    vec![output, banner::art()]
}

pub fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black()
    .to_string()
}

pub fn fat_separator_line() -> String {
    "═".repeat(TOTAL_WIDTH).bright_black().to_string()
}

/// Keys passed to [`aligned`] are padded to this width.
pub fn set_key_width<'a>(keys: impl IntoIterator<Item = &'a str>) {
    let width = keys.into_iter().map(str::len).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(width);
}

pub fn aligned(key: &str, value: impl Display) -> String {
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.to_string().color(colors::TEXT_DEFAULT);
    format!("{}{} {}", key.color(colors::PRIMARY), colon, value)
}

pub fn status_line<T: AsRef<str>>(msg: T) -> String {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT))
}

pub fn centered(msg: &str) -> String {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    format!("{}{}{}", space, msg, space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_shows_by_default() {
        let lines = banner_lines(false, 0);
        assert_eq!(lines.len(), 2);
        let strip = console::strip_ansi_codes(&lines[0]).into_owned();
        assert!(strip.contains(&format!("ROSHAMBO v{}", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn banner_respects_flag_and_quiet() {
        assert!(banner_lines(true, 0).is_empty());
        assert!(banner_lines(false, 1).is_empty());
        assert!(banner_lines(false, 2).is_empty());
    }

    #[test]
    fn header_line_fills_width() {
        let line = console::strip_ansi_codes(&header_line("results")).into_owned();
        assert!(line.contains("⟦ RESULTS ⟧"));
        assert_eq!(line.chars().count(), TOTAL_WIDTH);
    }
}
