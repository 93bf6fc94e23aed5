//! GridView: maps grids and states into plain ASCII text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Grid, State};
use crate::types::Action;

/// Arrow drawn between the two panels of a transition, around the shape name.
const ARROW_HEAD: &str = " --- ";
const ARROW_TAIL: &str = " --> ";

/// Text renderer for grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    filled: char,
    empty: char,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            filled: '*',
            empty: '.',
        }
    }
}

impl GridView {
    pub fn new(filled: char, empty: char) -> Self {
        Self { filled, empty }
    }

    /// One string per grid row, top to bottom.
    pub fn lines(&self, grid: &Grid) -> Vec<String> {
        grid.rows()
            .map(|row| {
                row.iter()
                    .map(|&c| if c { self.filled } else { self.empty })
                    .collect::<String>()
            })
            .collect()
    }

    /// Whole grid, newline-terminated rows.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity((grid.width() + 1) * grid.height());
        for line in self.lines(grid) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// `before --- Shape --> after`, panels side by side.
    ///
    /// The arrow sits on the middle row; other rows are padded so the right
    /// panel stays aligned.
    pub fn render_transition(&self, before: &State, after: &State) -> String {
        let left = self.lines(before.grid());
        let right = self.lines(after.grid());
        let arrow = format!("{}{}{}", ARROW_HEAD, before.next_shape(), ARROW_TAIL);
        let blank_arrow = " ".repeat(arrow.len());

        let rows = left.len().max(right.len());
        let mid = rows / 2;
        let left_w = before.grid().width();
        let right_w = after.grid().width();

        let mut out = String::new();
        for r in 0..rows {
            let l = left.get(r).cloned().unwrap_or_else(|| " ".repeat(left_w));
            let rg = right.get(r).cloned().unwrap_or_else(|| " ".repeat(right_w));
            let conn = if r == mid { arrow.as_str() } else { blank_arrow.as_str() };
            out.push_str(&l);
            out.push_str(conn);
            out.push_str(&rg);
            out.push('\n');
        }
        out
    }
}

/// One line describing an action.
pub fn describe_action(action: &Action) -> String {
    let p = action.position();
    format!(
        "possible action at ({}, {}) with rotation {}",
        p.row,
        p.col,
        action.rotation()
    )
}

/// Count header followed by one line per action.
pub fn render_action_list(actions: &[Action]) -> String {
    let mut out = format!("{} possible actions\n", actions.len());
    for action in actions {
        out.push_str(&describe_action(action));
        out.push('\n');
    }
    out
}
