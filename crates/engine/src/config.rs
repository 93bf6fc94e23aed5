//! Score configuration loading
//!
//! The configuration is plain text holding at least five whitespace-separated
//! integers, in the order `one_line two_lines three_lines one_gap many_gaps`.
//! Anything after the fifth integer is ignored.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::types::{ScoreConfig, SCORE_CONFIG_LEN};

/// Default configuration path used by the console runner
pub const DEFAULT_CONFIG_PATH: &str = "config.txt";

#[derive(Debug)]
pub enum ConfigError {
    /// The source could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Fewer than five integers were present.
    TooFewValues { found: usize },
    /// One of the first five tokens is not an integer.
    InvalidInteger { index: usize, token: String },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "config_unreadable",
            ConfigError::TooFewValues { .. } | ConfigError::InvalidInteger { .. } => {
                "config_invalid"
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to open config file '{}': {}", path.display(), source)
            }
            ConfigError::TooFewValues { found } => write!(
                f,
                "config must contain at least {} ints, found {}",
                SCORE_CONFIG_LEN, found
            ),
            ConfigError::InvalidInteger { index, token } => {
                write!(f, "config value {} is not an integer: {:?}", index, token)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse a score configuration from text
pub fn parse_score_config(text: &str) -> Result<ScoreConfig, ConfigError> {
    let mut values = [0i32; SCORE_CONFIG_LEN];
    let mut tokens = text.split_whitespace();

    for (index, slot) in values.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or(ConfigError::TooFewValues { found: index })?;
        *slot = token.parse().map_err(|_| ConfigError::InvalidInteger {
            index,
            token: token.to_string(),
        })?;
    }

    Ok(ScoreConfig::from(values))
}

/// Read and parse a score configuration file
pub fn load_score_config(path: impl AsRef<Path>) -> Result<ScoreConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_score_config(&text)
}
