//! fretquiz CLI — the terminal fretboard quiz.

use std::ffi::OsString;
use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod game;

use commands::PlayArgs;

#[derive(Parser)]
#[command(
    name = "fretquiz",
    version,
    about = "Learn the notes on the guitar fretboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every note on every string
    Chart,

    /// Create a starter fretquiz.toml
    Init,
}

/// Accept the single-dash `-sharps` / `-flats` spellings as long flags.
fn legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-sharps") => OsString::from("--sharps"),
            Some("-flats") => OsString::from("--flats"),
            _ => arg,
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fretquiz=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse_from(legacy_args(std::env::args_os()));

    let result = match cli.command {
        Some(Commands::Chart) => commands::chart::execute(cli.play),
        Some(Commands::Init) => commands::init::execute(),
        None => commands::play::execute(cli.play),
    };

    if let Err(e) = result {
        eprintln!("Something went wrong: {e:#}");
        process::exit(1);
    }
}
