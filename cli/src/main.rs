mod commands;
mod terminal;

use commands::{CommandLine, Commands, play, throw};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    let cfg = commands.config();

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Play) {
        Commands::Play => play::play(&cfg),
        Commands::Throw { moves } => throw::throw(moves, &cfg),
    }
}
