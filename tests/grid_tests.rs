//! Grid tests - bounds, placement atomicity, copies

use tromino_tetris::core::{Grid, PlaceError};
use tromino_tetris::types::{Position, Shape};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(3, 4);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 4);

    // All cells should be empty
    for row in 0..4 {
        for col in 0..3 {
            assert!(grid.is_available(row, col), "Cell ({}, {}) should be available", row, col);
            assert_eq!(grid.get(row, col), Some(false));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(3, 4);

    // Negative coordinates
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);

    // Beyond bounds
    assert_eq!(grid.get(4, 0), None);
    assert_eq!(grid.get(0, 3), None);

    // Never available for placement
    assert!(grid.is_occupied(-1, 0));
    assert!(grid.is_occupied(0, 3));
    assert!(!grid.is_available(4, 2));
}

#[test]
fn test_can_place_in_bounds_and_empty() {
    let grid = Grid::new(3, 4);
    assert!(grid.can_place(Shape::IPiece, Position::new(3, 0), 0));
    assert!(grid.can_place(Shape::IPiece, Position::new(1, 2), 1));
    assert!(grid.can_place(Shape::LPiece, Position::new(2, 1), 0));
}

#[test]
fn test_can_place_rejects_edges() {
    let grid = Grid::new(3, 4);
    // Horizontal bar spilling right.
    assert!(!grid.can_place(Shape::IPiece, Position::new(3, 1), 0));
    // Vertical bar spilling below.
    assert!(!grid.can_place(Shape::IPiece, Position::new(2, 0), 1));
    // L whose missing corner is the origin still checks the other three cells.
    assert!(!grid.can_place(Shape::LPiece, Position::new(3, 0), 0));
    assert!(!grid.can_place(Shape::LPiece, Position::new(-1, 0), 0));
}

#[test]
fn test_extreme_origins_are_out_of_bounds() {
    let mut grid = Grid::new(3, 4);
    let before = grid.clone();

    for shape in Shape::ALL {
        for rotation in 0..4 {
            for origin in [
                Position::new(i32::MAX, 0),
                Position::new(0, i32::MAX),
                Position::new(i32::MAX - 1, i32::MAX - 1),
                Position::new(i32::MIN, i32::MIN),
            ] {
                assert!(!grid.can_place(shape, origin, rotation));
                assert_eq!(
                    grid.place(shape, origin, rotation),
                    Err(PlaceError::OutOfBounds)
                );
            }
        }
    }
    assert_eq!(
        grid.place(Shape::IPiece, Position::new(0, i32::MAX - 1), 0),
        Err(PlaceError::OutOfBounds)
    );
    assert_eq!(grid, before);
}

#[test]
fn test_can_place_rejects_filled_cells() {
    let grid = Grid::from_rows(&["...", "...", ".*.", "..."]);
    assert!(!grid.can_place(Shape::IPiece, Position::new(2, 0), 0));
    assert!(!grid.can_place(Shape::IPiece, Position::new(0, 1), 1));
    // Origin (1, 0) with rotation 0 skips (1, 0) itself and hits (2, 1).
    assert!(!grid.can_place(Shape::LPiece, Position::new(1, 0), 0));
    assert!(grid.can_place(Shape::IPiece, Position::new(3, 0), 0));
}

#[test]
fn test_place_fills_exactly_three_cells() {
    let mut grid = Grid::from_rows(&["...", "...", "...", "*.."]);
    let before = grid.clone();

    grid.place(Shape::LPiece, Position::new(2, 1), 0).unwrap();

    let placed = [Position::new(2, 2), Position::new(3, 1), Position::new(3, 2)];
    for row in 0..4 {
        for col in 0..3 {
            let cell = grid.get(row, col).unwrap();
            if placed.contains(&Position::new(row, col)) {
                assert!(cell, "({}, {}) should be filled", row, col);
            } else {
                assert_eq!(Some(cell), before.get(row, col));
            }
        }
    }
    assert_eq!(grid.filled_count(), before.filled_count() + 3);
}

#[test]
fn test_failed_place_is_atomic() {
    let mut grid = Grid::from_rows(&["...", "...", "...", "..*"]);
    let before = grid.clone();

    // First two cells are free, the third is not.
    assert_eq!(
        grid.place(Shape::IPiece, Position::new(3, 0), 0),
        Err(PlaceError::Occupied)
    );
    assert_eq!(grid, before);

    assert_eq!(
        grid.place(Shape::IPiece, Position::new(2, 1), 1),
        Err(PlaceError::OutOfBounds)
    );
    assert_eq!(grid, before);
}

#[test]
fn test_place_error_codes() {
    assert_eq!(PlaceError::OutOfBounds.code(), "invalid_placement");
    assert_eq!(PlaceError::Occupied.code(), "invalid_placement");
    assert!(PlaceError::Occupied.to_string().contains("filled cell"));
}

#[test]
fn test_clone_is_independent() {
    let original = Grid::from_rows(&["...", "...", "...", "*.."]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.place(Shape::IPiece, Position::new(0, 0), 0).unwrap();

    assert_ne!(copy, original);
    assert_eq!(original.filled_count(), 1);
    assert_eq!(original.get(0, 0), Some(false));
}

#[test]
fn test_empty_positions_row_major_order() {
    let grid = Grid::from_rows(&[".*.", "*.*"]);
    let empty: Vec<Position> = grid.empty_positions().collect();
    assert_eq!(
        empty,
        vec![Position::new(0, 0), Position::new(0, 2), Position::new(1, 1)]
    );
}

#[test]
fn test_is_row_full() {
    let grid = Grid::from_rows(&["*.*", "***"]);
    assert!(!grid.is_row_full(0));
    assert!(grid.is_row_full(1));
    assert!(!grid.is_row_full(2));
}
