//! Piece inventory manager (default binary).
//!
//! Numeric menu over stdin/stdout. Logs go to stderr so they never mix
//! with the state frame.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use tetris_stack::core::{clock_seed, Inventory};
use tetris_stack::input::ChoiceReader;
use tetris_stack::session::{self, StateFormat};
use tetris_stack::term::ConsoleRenderer;

/// tetris-stack - upcoming queue and reserve stack manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the piece generator (defaults to the wall clock)
    #[arg(short, long, env = "TETRIS_STACK_SEED")]
    seed: Option<u64>,

    /// Print the state and each outcome as JSON lines instead of the text frame
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Maximum level of log events written to stderr
    #[arg(long, env = "TETRIS_STACK_LOG", default_value = "warn")]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, "starting session");

    let format = if args.json {
        StateFormat::Json
    } else {
        StateFormat::Text
    };
    let color = !args.no_color && format == StateFormat::Text && io::stdout().is_terminal();

    let mut inventory = Inventory::seeded(seed);
    let mut renderer = ConsoleRenderer::stdout(color);
    let mut reader = ChoiceReader::new(io::stdin().lock());

    session::run(&mut inventory, &mut renderer, &mut reader, format)?;
    Ok(())
}
