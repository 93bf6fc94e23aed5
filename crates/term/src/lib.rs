//! Terminal output module.
//!
//! Turns grids, states and action lists into the plain text the console
//! runner prints, plus serialisable reports for `--json` runs.
//!
//! Goals:
//! - Keep `core` deterministic and free of formatting concerns
//! - Keep every renderer pure so output can be asserted in tests

pub mod report;
pub mod view;

pub use tromino_core as core;
pub use tromino_types as types;

pub use report::{to_json, ActionReport, GameReport, RunReport, ScoreReport, StepReport};
pub use view::{describe_action, render_action_list, GridView};
