//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, rendering, reports).
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs:
//!
//! - **row** grows downward, in the direction pieces fall
//! - **col** grows rightward
//!
//! Both are signed so that offset arithmetic can probe cells outside the grid.
//!
//! # Examples
//!
//! ```
//! use tromino_types::{Action, Position, ScoreConfig, Shape};
//!
//! let shape = Shape::from_str("l").unwrap();
//! assert_eq!(shape, Shape::LPiece);
//! assert_eq!(shape.to_string(), "LPiece");
//!
//! let action = Action::new(Position::new(3, 0), 1);
//! assert_eq!(action.to_string(), "(3, 0) @rot=1");
//!
//! let config = ScoreConfig::from([10, 20, 30, 1, 2]);
//! assert_eq!(config.one_line, 10);
//! assert_eq!(config.many_gaps, 2);
//! ```

use std::fmt;

/// Grid width used by the console runner when none is given.
pub const DEFAULT_GRID_WIDTH: usize = 3;

/// Grid height used by the console runner when none is given.
pub const DEFAULT_GRID_HEIGHT: usize = 4;

/// Upper bound on moves played in a single random-play session.
pub const MAX_MOVES: u32 = 10_000;

/// Number of integers in a score configuration.
pub const SCORE_CONFIG_LEN: usize = 5;

/// The two tromino piece variants
///
/// - **IPiece**: straight bar of three cells, 2 distinct rotations
/// - **LPiece**: 2x2 box with one corner missing, 4 distinct rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    IPiece,
    LPiece,
}

impl Shape {
    /// All variants, in draw order.
    pub const ALL: [Shape; 2] = [Shape::IPiece, Shape::LPiece];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tromino_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::IPiece));
    /// assert_eq!(Shape::from_str("IPiece"), Some(Shape::IPiece));
    /// assert_eq!(Shape::from_str("L"), Some(Shape::LPiece));
    /// assert_eq!(Shape::from_str("t"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" | "ipiece" => Some(Shape::IPiece),
            "l" | "lpiece" => Some(Shape::LPiece),
            _ => None,
        }
    }

    /// Convert to lowercase short name
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::IPiece => "i",
            Shape::LPiece => "l",
        }
    }

    /// Type name as printed in transcripts
    pub fn name(&self) -> &'static str {
        match self {
            Shape::IPiece => "IPiece",
            Shape::LPiece => "LPiece",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A grid cell coordinate (row grows downward, col grows rightward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by a `(row_offset, col_offset)` pair.
    ///
    /// Saturates at the `i32` limits. A saturated coordinate lies outside
    /// every grid, so bounds checks still reject it.
    pub fn offset(self, (dr, dc): (i32, i32)) -> Self {
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// A proposed placement of the next shape: origin cell plus rotation index
///
/// Actions carry no reference to the grid they were enumerated for; whether
/// one is legal is decided by the state it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    position: Position,
    rotation: i32,
}

impl Action {
    pub const fn new(position: Position, rotation: i32) -> Self {
        Self { position, rotation }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @rot={}", self.position, self.rotation)
    }
}

/// Heuristic weights used by the scorer
///
/// Read from configuration in the order
/// `[one_line, two_lines, three_lines, one_gap, many_gaps]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreConfig {
    /// Bonus for exactly one completed row
    pub one_line: i32,
    /// Bonus for exactly two completed rows
    pub two_lines: i32,
    /// Bonus for exactly three completed rows
    pub three_lines: i32,
    /// Delta for exactly one gap
    pub one_gap: i32,
    /// Delta for two or more gaps
    pub many_gaps: i32,
}

impl ScoreConfig {
    pub fn to_array(&self) -> [i32; SCORE_CONFIG_LEN] {
        [
            self.one_line,
            self.two_lines,
            self.three_lines,
            self.one_gap,
            self.many_gaps,
        ]
    }
}

impl From<[i32; SCORE_CONFIG_LEN]> for ScoreConfig {
    fn from(values: [i32; SCORE_CONFIG_LEN]) -> Self {
        Self {
            one_line: values[0],
            two_lines: values[1],
            three_lines: values[2],
            one_gap: values[3],
            many_gaps: values[4],
        }
    }
}

impl fmt::Display for ScoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.to_array();
        write!(f, "[{}, {}, {}, {}, {}]", v[0], v[1], v[2], v[3], v[4])
    }
}
