pub mod play;
pub mod throw;

use clap::{ArgAction, Parser, Subcommand};
use roshambo_common::config::{Config, DEFAULT_LOG_ROWS};
use roshambo_common::game::Move;
use roshambo_core::RandomMoves;

#[derive(Parser)]
#[command(name = "roshambo", version)]
#[command(about = "Rock, paper, scissors against the computer.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed the computer's moves to replay a session
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Do not print the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less (-q drops banner and headers, -qq also drops per-round lines)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Print diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Play in the terminal, one key press per throw (default)
    #[command(alias = "p")]
    Play,
    /// Throw the given moves in order and print the results
    #[command(alias = "t")]
    Throw {
        #[arg(required = true)]
        moves: Vec<Move>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            seed: self.seed,
            log_rows: DEFAULT_LOG_ROWS,
        }
    }
}

/// The computer opponent for a session, seeded when the user asked for it.
pub fn computer(cfg: &Config) -> RandomMoves {
    match cfg.seed {
        Some(seed) => RandomMoves::seeded(seed),
        None => RandomMoves::new(),
    }
}
