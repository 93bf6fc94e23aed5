//! Action enumeration - legal resting placements without a drop simulation
//!
//! Gravity is modelled in two phases:
//!
//! 1. The *landing surface*: for each column, the cell a single falling cell
//!    would come to rest in (just above the topmost filled cell, or the bottom
//!    row of an empty column).
//! 2. A placement is legal if the shape fits and at least one of its cells
//!    lies on that surface.
//!
//! Output order is row-major over origins, rotations ascending per origin.
//! A single origin may yield several actions, one per resting rotation.

use crate::grid::Grid;
use crate::pieces::{self, rotation_count};
use crate::types::{Action, Position, Shape};

/// Per-column resting cells, at most one per column
///
/// A column whose top cell is filled has no landing cell.
pub fn landing_surface(grid: &Grid) -> Vec<Position> {
    let last_row = grid.height() as i32 - 1;
    let mut surface = Vec::with_capacity(grid.width());

    for col in 0..grid.width() as i32 {
        match (0..=last_row).find(|&row| grid.is_occupied(row, col)) {
            Some(0) => {}
            Some(row) => surface.push(Position::new(row - 1, col)),
            None => surface.push(Position::new(last_row, col)),
        }
    }
    surface
}

fn rests_on(surface: &[Position], cells: &[Position; 3]) -> bool {
    cells.iter().any(|c| surface.contains(c))
}

/// Every legal action for `shape` on `grid`
pub fn available_actions(grid: &Grid, shape: Shape) -> Vec<Action> {
    let surface = landing_surface(grid);
    let rotations = rotation_count(shape);
    let mut actions = Vec::new();

    for origin in grid.empty_positions() {
        for rotation in 0..rotations {
            if !grid.can_place(shape, origin, rotation) {
                continue;
            }
            let cells = pieces::cells(shape, origin, rotation);
            if rests_on(&surface, &cells) {
                actions.push(Action::new(origin, rotation));
            }
        }
    }
    actions
}

/// Whether `action` would appear in `available_actions(grid, shape)`
///
/// Checks the same conditions directly instead of enumerating.
pub fn is_available(grid: &Grid, shape: Shape, action: &Action) -> bool {
    let origin = action.position();
    let rotation = action.rotation();

    if !(0..rotation_count(shape)).contains(&rotation) {
        return false;
    }
    if !grid.is_available(origin.row, origin.col) || !grid.can_place(shape, origin, rotation) {
        return false;
    }
    rests_on(&landing_surface(grid), &pieces::cells(shape, origin, rotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_surface_empty_grid_is_floor() {
        let grid = Grid::new(3, 4);
        assert_eq!(
            landing_surface(&grid),
            vec![Position::new(3, 0), Position::new(3, 1), Position::new(3, 2)]
        );
    }

    #[test]
    fn test_landing_surface_sits_above_topmost_block() {
        let grid = Grid::from_rows(&["...", ".*.", "...", "*.*"]);
        assert_eq!(
            landing_surface(&grid),
            vec![Position::new(2, 0), Position::new(0, 1), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_full_column_has_no_landing_cell() {
        let grid = Grid::from_rows(&["*..", "*..", "*.."]);
        let surface = landing_surface(&grid);
        assert_eq!(surface, vec![Position::new(2, 1), Position::new(2, 2)]);
    }

    #[test]
    fn test_empty_grid_i_piece_actions() {
        let grid = Grid::new(3, 4);
        let actions = available_actions(&grid, Shape::IPiece);
        // Horizontal bar on the floor, plus a vertical bar per column from row 1.
        assert_eq!(
            actions,
            vec![
                Action::new(Position::new(1, 0), 1),
                Action::new(Position::new(1, 1), 1),
                Action::new(Position::new(1, 2), 1),
                Action::new(Position::new(3, 0), 0),
            ]
        );
    }

    #[test]
    fn test_same_origin_can_yield_several_rotations() {
        let grid = Grid::new(2, 2);
        let actions = available_actions(&grid, Shape::LPiece);
        // Each orientation only fits at (0, 0) and each touches the bottom row.
        assert_eq!(
            actions,
            vec![
                Action::new(Position::new(0, 0), 0),
                Action::new(Position::new(0, 0), 1),
                Action::new(Position::new(0, 0), 2),
                Action::new(Position::new(0, 0), 3),
            ]
        );
    }

    #[test]
    fn test_floating_placement_is_rejected() {
        let grid = Grid::new(3, 4);
        assert!(grid.can_place(Shape::IPiece, Position::new(0, 0), 0));
        assert!(!is_available(&grid, Shape::IPiece, &Action::new(Position::new(0, 0), 0)));
    }

    #[test]
    fn test_is_available_rejects_unnormalised_rotation() {
        let grid = Grid::new(3, 4);
        assert!(is_available(&grid, Shape::IPiece, &Action::new(Position::new(3, 0), 0)));
        assert!(!is_available(&grid, Shape::IPiece, &Action::new(Position::new(3, 0), 2)));
    }
}
