//! Scoring module - heuristic grid evaluation
//!
//! A grid is rated on two features:
//! - completed rows, mapped through the line table (1, 2 or 3 rows; more than
//!   three earn nothing extra)
//! - gaps, empty cells below the topmost filled cell of their column, mapped
//!   to one of two buckets (exactly one, or two and more)
//!
//! Rows are never cleared, so a completed row keeps scoring on every later
//! evaluation of the grid.

use crate::grid::Grid;
use crate::types::ScoreConfig;

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub completed_lines: usize,
    pub gaps: usize,
    /// Bonus from the line table (0 when no entry applies).
    pub line_bonus: i32,
    /// Delta from the gap buckets.
    pub gap_delta: i32,
    pub total: i32,
}

/// Number of rows with every column filled
pub fn count_completed_lines(grid: &Grid) -> usize {
    (0..grid.height()).filter(|&row| grid.is_row_full(row)).count()
}

/// Number of empty cells lying under a filled cell in the same column
pub fn count_gaps(grid: &Grid) -> usize {
    let mut gaps = 0;
    for col in 0..grid.width() {
        let mut found_filled = false;
        for row in grid.rows() {
            if row[col] {
                found_filled = true;
            } else if found_filled {
                gaps += 1;
            }
        }
    }
    gaps
}

/// Line table lookup
pub fn line_bonus(lines: usize, config: &ScoreConfig) -> i32 {
    match lines {
        1 => config.one_line,
        2 => config.two_lines,
        3 => config.three_lines,
        _ => 0,
    }
}

/// Gap bucket lookup
pub fn gap_delta(gaps: usize, config: &ScoreConfig) -> i32 {
    match gaps {
        0 => 0,
        1 => config.one_gap,
        _ => config.many_gaps,
    }
}

/// Rate a grid, keeping the intermediate counts
pub fn evaluate_detailed(grid: &Grid, config: &ScoreConfig) -> ScoreResult {
    let completed_lines = count_completed_lines(grid);
    let gaps = count_gaps(grid);
    let line_bonus = line_bonus(completed_lines, config);
    let gap_delta = gap_delta(gaps, config);

    ScoreResult {
        completed_lines,
        gaps,
        line_bonus,
        gap_delta,
        total: line_bonus.saturating_add(gap_delta),
    }
}

/// Rate a grid
pub fn evaluate(grid: &Grid, config: &ScoreConfig) -> i32 {
    evaluate_detailed(grid, config).total
}
