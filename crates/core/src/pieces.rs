//! Pieces module - tromino footprints and rotation tables
//!
//! Offsets are `(row_offset, col_offset)` pairs relative to the placement
//! origin. Rotation indices are normalised with floor-mod, so any integer is a
//! valid rotation and `-1` selects the last orientation.

use crate::types::{Position, Shape};

/// Offset of a single cell relative to the placement origin
pub type CellOffset = (i32, i32);

/// Shape of a piece - 3 cell offsets from the placement origin
pub type PieceShape = [CellOffset; 3];

/// Number of distinct orientations of a shape
pub fn rotation_count(shape: Shape) -> i32 {
    match shape {
        Shape::IPiece => 2,
        Shape::LPiece => 4,
    }
}

/// Reduce any rotation index into `[0, rotation_count(shape))`
pub fn normalize_rotation(shape: Shape, rotation: i32) -> i32 {
    rotation.rem_euclid(rotation_count(shape))
}

/// Get the cell offsets for a shape and rotation
pub fn get_shape(shape: Shape, rotation: i32) -> PieceShape {
    let r = normalize_rotation(shape, rotation);
    match shape {
        Shape::IPiece => get_i_shape(r),
        Shape::LPiece => get_l_shape(r),
    }
}

/// I piece shapes
fn get_i_shape(rotation: i32) -> PieceShape {
    match rotation {
        // horizontal: 1 x 3
        0 => [(0, 0), (0, 1), (0, 2)],
        // vertical: 3 x 1
        _ => [(0, 0), (1, 0), (2, 0)],
    }
}

/// L piece shapes: a 2x2 box with one corner missing
fn get_l_shape(rotation: i32) -> PieceShape {
    match rotation {
        // missing top-left
        0 => [(0, 1), (1, 0), (1, 1)],
        // missing top-right
        1 => [(0, 0), (1, 0), (1, 1)],
        // missing bottom-right
        2 => [(0, 0), (0, 1), (1, 0)],
        // missing bottom-left
        _ => [(0, 0), (0, 1), (1, 1)],
    }
}

/// Absolute cells covered by a shape placed at `origin`
pub fn cells(shape: Shape, origin: Position, rotation: i32) -> [Position; 3] {
    get_shape(shape, rotation).map(|off| origin.offset(off))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_counts() {
        assert_eq!(rotation_count(Shape::IPiece), 2);
        assert_eq!(rotation_count(Shape::LPiece), 4);
    }

    #[test]
    fn test_negative_rotation_wraps() {
        assert_eq!(normalize_rotation(Shape::IPiece, -1), 1);
        assert_eq!(normalize_rotation(Shape::LPiece, -1), 3);
        assert_eq!(normalize_rotation(Shape::LPiece, -6), 2);
        assert_eq!(get_shape(Shape::IPiece, -1), get_shape(Shape::IPiece, 1));
    }

    #[test]
    fn test_every_orientation_is_distinct() {
        for shape in Shape::ALL {
            let n = rotation_count(shape);
            for a in 0..n {
                for b in (a + 1)..n {
                    assert_ne!(get_shape(shape, a), get_shape(shape, b));
                }
            }
        }
    }

    #[test]
    fn test_cells_translate_offsets() {
        let placed = cells(Shape::LPiece, Position::new(2, 1), 0);
        assert_eq!(
            placed,
            [Position::new(2, 2), Position::new(3, 1), Position::new(3, 2)]
        );
    }
}
