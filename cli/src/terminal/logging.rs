use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

/// Set while the interactive board owns the screen.
static DIAGNOSTICS_PAUSED: AtomicBool = AtomicBool::new(false);

pub fn pause_diagnostics(paused: bool) {
    DIAGNOSTICS_PAUSED.store(paused, Ordering::Relaxed);
}

pub fn diagnostics_paused() -> bool {
    DIAGNOSTICS_PAUSED.load(Ordering::Relaxed)
}

pub struct RoshamboFormatter;

impl<S, N> FormatEvent<S, N> for RoshamboFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a print event, unquoted.
#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

/// User output goes to stdout untouched. Diagnostics go to stderr, filtered by
/// `RUST_LOG` or else by how many `-v` flags were given, and are dropped while
/// [`pause_diagnostics`] is on.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let output = tracing_subscriber::fmt::layer()
        .event_format(RoshamboFormatter)
        .with_writer(io::stdout)
        .with_filter(filter_fn(|meta| meta.target() == PRINT_TARGET));

    let diagnostics = tracing_subscriber::fmt::layer()
        .event_format(RoshamboFormatter)
        .with_writer(io::stderr)
        .with_filter(filter_fn(|meta| {
            meta.target() != PRINT_TARGET && !diagnostics_paused()
        }))
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(output)
        .with(diagnostics)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_toggles() {
        pause_diagnostics(true);
        assert!(diagnostics_paused());
        pause_diagnostics(false);
        assert!(!diagnostics_paused());
    }
}
