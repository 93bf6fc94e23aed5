//! Machine-readable run reports (JSON).
//!
//! These mirror what the console runner prints in text mode, so a run can be
//! piped into other tools with `--json`.

use serde::Serialize;

use crate::core::{Grid, ScoreResult};
use crate::types::{Action, ScoreConfig};
use crate::view::GridView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionReport {
    pub row: i32,
    pub col: i32,
    pub rotation: i32,
}

impl From<&Action> for ActionReport {
    fn from(action: &Action) -> Self {
        let p = action.position();
        Self {
            row: p.row,
            col: p.col,
            rotation: action.rotation(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub completed_lines: usize,
    pub gaps: usize,
    pub line_bonus: i32,
    pub gap_delta: i32,
    pub total: i32,
}

impl From<ScoreResult> for ScoreReport {
    fn from(r: ScoreResult) -> Self {
        Self {
            completed_lines: r.completed_lines,
            gaps: r.gaps,
            line_bonus: r.line_bonus,
            gap_delta: r.gap_delta,
            total: r.total,
        }
    }
}

/// Rows of a grid as `*`/`.` strings.
pub fn grid_rows(grid: &Grid) -> Vec<String> {
    GridView::default().lines(grid)
}

/// Single-transition run: enumerate, apply one action, score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub config: [i32; 5],
    pub width: usize,
    pub height: usize,
    pub shape: String,
    pub grid: Vec<String>,
    pub actions: Vec<ActionReport>,
    /// Absent when no action was available.
    pub applied: Option<ActionReport>,
    pub next_shape: Option<String>,
    pub result_grid: Option<Vec<String>>,
    pub score: Option<ScoreReport>,
}

impl RunReport {
    /// Report for the starting position, before any action is applied.
    pub fn new(config: &ScoreConfig, grid: &Grid, shape: &str, actions: &[Action]) -> Self {
        Self {
            config: config.to_array(),
            width: grid.width(),
            height: grid.height(),
            shape: shape.to_string(),
            grid: grid_rows(grid),
            actions: actions.iter().map(ActionReport::from).collect(),
            applied: None,
            next_shape: None,
            result_grid: None,
            score: None,
        }
    }

    pub fn with_result(
        mut self,
        applied: &Action,
        next_shape: &str,
        grid: &Grid,
        score: ScoreResult,
    ) -> Self {
        self.applied = Some(applied.into());
        self.next_shape = Some(next_shape.to_string());
        self.result_grid = Some(grid_rows(grid));
        self.score = Some(score.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub placed: String,
    pub action: ActionReport,
    pub gain: i32,
    pub score: i64,
}

/// Random-play session summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub config: [i32; 5],
    pub seed: u32,
    pub moves: u32,
    pub score: i64,
    pub steps: Vec<StepReport>,
    pub final_grid: Vec<String>,
}

/// Pretty-printed JSON for any report.
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
