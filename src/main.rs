use clap::Parser;
use log::LevelFilter;
use wordflip::engine::{SessionConfig, SpaceSeparatedReverser};
use wordflip::repl::{InteractionLoop, StdConsole};

#[derive(Parser, Debug)]
#[clap(name = "wordflip", version, about = "Reverse the word order of each sentence you type")]
struct Cli {
    #[clap(
        long,
        default_value = "warn",
        help = "Log level written to stderr (off, error, warn, info, debug, trace)"
    )]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let mut console = StdConsole::stdio();
    InteractionLoop::new(&mut console, SpaceSeparatedReverser, SessionConfig::default())
        .execute()?;

    Ok(())
}
