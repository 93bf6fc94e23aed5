//! Grid module - the fixed-size playfield
//!
//! The grid is a `width x height` matrix where each cell is either empty or
//! filled. Uses a flat buffer in row-major order (`row * width + col`).
//! Coordinates: `(row, col)`, row 0 is the top and rows grow in the direction
//! of gravity.
//!
//! Cells only ever go from empty to filled, through [`Grid::place`].

use std::fmt;

use crate::pieces;
use crate::types::{Position, Shape};

/// Character used for a filled cell in text form
pub const FILLED_CHAR: char = '*';

/// Character used for an empty cell in text form
pub const EMPTY_CHAR: char = '.';

/// Why a placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    OutOfBounds,
    Occupied,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::OutOfBounds | PlaceError::Occupied => "invalid_placement",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::OutOfBounds => "placement would leave the grid",
            PlaceError::Occupied => "placement overlaps a filled cell",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for PlaceError {}

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be non-zero, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a grid from text rows of `*` (filled) and `.` (empty)
    ///
    /// # Panics
    ///
    /// Panics on an empty slice, ragged rows, or any other character.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), width, "ragged row {}", row);
            for (col, ch) in line.chars().enumerate() {
                grid.cells[row * width + col] = match ch {
                    FILLED_CHAR => true,
                    EMPTY_CHAR => false,
                    other => panic!("unexpected cell character {:?}", other),
                };
            }
        }
        grid
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<bool> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied
    ///
    /// Out-of-bounds cells count as occupied: nothing can ever be placed there.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.get(row, col).unwrap_or(true)
    }

    /// Check if position is within bounds and empty
    pub fn is_available(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(false))
    }

    /// Check whether `shape` fits at `origin` with `rotation`
    pub fn can_place(&self, shape: Shape, origin: Position, rotation: i32) -> bool {
        pieces::cells(shape, origin, rotation)
            .iter()
            .all(|p| self.is_available(p.row, p.col))
    }

    /// Commit a placement
    ///
    /// Either all three cells are filled or, on error, none are.
    pub fn place(
        &mut self,
        shape: Shape,
        origin: Position,
        rotation: i32,
    ) -> Result<(), PlaceError> {
        let cells = pieces::cells(shape, origin, rotation);

        // First check if all positions are valid
        let mut indices = [0usize; 3];
        for (slot, p) in indices.iter_mut().zip(cells.iter()) {
            let idx = self.index(p.row, p.col).ok_or(PlaceError::OutOfBounds)?;
            if self.cells[idx] {
                return Err(PlaceError::Occupied);
            }
            *slot = idx;
        }

        // Then fill all cells
        for idx in indices {
            self.cells[idx] = true;
        }
        Ok(())
    }

    /// Empty cells in row-major order
    ///
    /// Each call starts a fresh iteration.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| !**filled)
            .map(move |(idx, _)| Position::new((idx / width) as i32, (idx % width) as i32))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().all(|&c| c))
    }

    /// Borrow one row of cells
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                let ch = if cell { FILLED_CHAR } else { EMPTY_CHAR };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
