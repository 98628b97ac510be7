//! The default command: play the quiz on stdin/stdout.

use std::io;

use anyhow::Result;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::commands::PlayArgs;
use crate::game::{Game, GameSettings};

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let settings = GameSettings::from_config(&config, args.frets.as_deref())?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        seed,
        neck_length = config.neck_length,
        allow_repeats = config.allow_repeats,
        spelling = %config.spelling,
        "starting quiz"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new(
        stdin.lock(),
        stdout.lock(),
        Pcg32::seed_from_u64(seed),
        settings,
    );
    game.run()?;

    Ok(())
}
