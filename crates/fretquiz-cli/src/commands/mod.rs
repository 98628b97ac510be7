pub mod chart;
pub mod init;
pub mod play;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use fretquiz_core::theory::Spelling;

use crate::config::{load_config_from, FretquizConfig};

/// Options shared by the quiz and the chart.
#[derive(Debug, Clone, Default, Args)]
pub struct PlayArgs {
    /// Show sharp spellings first (default)
    #[arg(long, conflicts_with = "flats")]
    pub sharps: bool,

    /// Show flat spellings first
    #[arg(long)]
    pub flats: bool,

    /// Highest fret a riddle may ask about
    #[arg(long)]
    pub neck_length: Option<u8>,

    /// Allow two strings to share a fret in one riddle
    #[arg(long)]
    pub allow_repeats: bool,

    /// Seed for reproducible riddles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ask one fixed riddle every round (e.g. "3,5,7,2,0,1")
    #[arg(long, value_delimiter = ',')]
    pub frets: Option<Vec<u8>>,

    /// Pause before the verdict, in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    /// Load the config file and layer these flags over it.
    pub fn resolve_config(&self) -> Result<FretquizConfig> {
        let mut config = load_config_from(self.config.as_deref())?;

        if let Some(neck_length) = self.neck_length {
            config.neck_length = neck_length;
        }
        if let Some(pause_ms) = self.pause_ms {
            config.pause_ms = pause_ms;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.allow_repeats {
            config.allow_repeats = true;
        }
        if self.flats {
            config.spelling = Spelling::Flats;
        } else if self.sharps {
            config.spelling = Spelling::Sharps;
        }

        config.validate()?;
        Ok(config)
    }
}
