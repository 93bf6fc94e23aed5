//! Engine crate - drives the core rules for a caller
//!
//! - [`config`]: loading the score configuration from text
//! - [`game`]: a game session with a cumulative score and random play

pub mod config;
pub mod game;

pub use tromino_core as core;
pub use tromino_types as types;

pub use config::{load_score_config, parse_score_config, ConfigError, DEFAULT_CONFIG_PATH};
pub use game::{Game, StepOutcome};
