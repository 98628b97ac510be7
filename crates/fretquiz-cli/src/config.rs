//! Configuration file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use fretquiz_core::riddle::{SampleOptions, DEFAULT_NECK_LENGTH};
use fretquiz_core::theory::Spelling;
use fretquiz_core::ValidationError;

/// Top-level fretquiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretquizConfig {
    /// Highest fret a riddle may ask about.
    #[serde(default = "default_neck_length")]
    pub neck_length: u8,
    /// Pause before the verdict, in milliseconds.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    /// Let two strings share a fret in one riddle.
    #[serde(default)]
    pub allow_repeats: bool,
    /// Spelling shown first when revealing accidentals.
    #[serde(default)]
    pub spelling: Spelling,
    /// Fixed RNG seed; a fresh one is drawn per run when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_neck_length() -> u8 {
    DEFAULT_NECK_LENGTH
}
fn default_pause_ms() -> u64 {
    1000
}

impl Default for FretquizConfig {
    fn default() -> Self {
        Self {
            neck_length: default_neck_length(),
            pause_ms: default_pause_ms(),
            allow_repeats: false,
            spelling: Spelling::default(),
            seed: None,
        }
    }
}

impl FretquizConfig {
    pub fn sample_options(&self) -> SampleOptions {
        SampleOptions {
            neck_length: self.neck_length,
            allow_repeats: self.allow_repeats,
        }
    }

    /// Reject settings no riddle can be drawn from.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.sample_options().validate()
    }
}

/// Apply `FRETQUIZ_*` overrides using `lookup` to read variables.
fn apply_env_overrides<F>(config: &mut FretquizConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("FRETQUIZ_NECK_LENGTH") {
        config.neck_length = v
            .trim()
            .parse()
            .with_context(|| format!("invalid FRETQUIZ_NECK_LENGTH: '{v}'"))?;
    }
    if let Some(v) = lookup("FRETQUIZ_PAUSE_MS") {
        config.pause_ms = v
            .trim()
            .parse()
            .with_context(|| format!("invalid FRETQUIZ_PAUSE_MS: '{v}'"))?;
    }
    if let Some(v) = lookup("FRETQUIZ_SEED") {
        config.seed = Some(
            v.trim()
                .parse()
                .with_context(|| format!("invalid FRETQUIZ_SEED: '{v}'"))?,
        );
    }
    Ok(())
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `fretquiz.toml` in the current directory
/// 2. `~/.config/fretquiz/config.toml`
///
/// Environment variable overrides: `FRETQUIZ_NECK_LENGTH`, `FRETQUIZ_PAUSE_MS`,
/// `FRETQUIZ_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<FretquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("fretquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => FretquizConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<FretquizConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("fretquiz"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn default_config() {
        let config = FretquizConfig::default();
        assert_eq!(config.neck_length, 12);
        assert_eq!(config.pause_ms, 1000);
        assert!(!config.allow_repeats);
        assert_eq!(config.spelling, Spelling::Sharps);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
neck_length = 15
spelling = "flats"
seed = 99
"#,
        )
        .unwrap();
        assert_eq!(config.neck_length, 15);
        assert_eq!(config.spelling, Spelling::Flats);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.pause_ms, 1000);
    }

    #[test]
    fn parse_rejects_bad_spelling() {
        assert!(parse_config("spelling = \"naturals\"").is_err());
    }

    #[test]
    fn env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FRETQUIZ_NECK_LENGTH", "20"),
            ("FRETQUIZ_PAUSE_MS", "0"),
            ("FRETQUIZ_SEED", " 7 "),
        ]
        .into_iter()
        .collect();
        let mut config = FretquizConfig::default();
        apply_env_overrides(&mut config, |k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.neck_length, 20);
        assert_eq!(config.pause_ms, 0);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn env_override_must_parse() {
        let mut config = FretquizConfig::default();
        let err = apply_env_overrides(&mut config, |k| {
            (k == "FRETQUIZ_NECK_LENGTH").then(|| "long".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("FRETQUIZ_NECK_LENGTH"));
    }

    #[test]
    fn short_neck_needs_repeats() {
        let mut config = FretquizConfig {
            neck_length: 3,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        config.allow_repeats = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/fretquiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
