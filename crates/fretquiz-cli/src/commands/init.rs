//! The `fretquiz init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    let path = Path::new("fretquiz.toml");
    if path.exists() {
        println!("fretquiz.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG).context("failed to write fretquiz.toml")?;
        println!("Created fretquiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit fretquiz.toml to set your neck length and spelling");
    println!("  2. Run: fretquiz chart");
    println!("  3. Run: fretquiz");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# fretquiz configuration

# Highest fret a riddle may ask about.
neck_length = 12

# Pause before the verdict, in milliseconds.
pause_ms = 1000

# Let two strings share a fret in one riddle.
allow_repeats = false

# "sharps" or "flats": which spelling to show first for accidentals.
spelling = "sharps"

# Uncomment for the same riddles every run.
# seed = 42
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, FretquizConfig};

    #[test]
    fn sample_config_matches_defaults() {
        let config = parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, FretquizConfig::default());
    }
}
