//! Brick grid geometry
//!
//! Brick rectangles are never stored; they are recomputed from the
//! linear brick index and fixed spacing constants. The simulation step
//! and the renderer both call [`brick_rect`], so they always agree on
//! where a brick is.

use super::rect::Rect;
use crate::consts::*;

/// Compute the rectangle of the brick at the given linear index.
///
/// Column is `index % 11` and row is `index % 7` - both derived from the
/// same linear index with no division. This is not a conventional
/// row-major mapping; the collision and render paths both depend on
/// reproducing exactly this formula.
pub fn brick_rect(index: usize) -> Rect {
    let col = (index % GRID_COLS) as f32;
    let row = (index % GRID_ROWS) as f32;

    let x = (col + 1.0) * BRICK_SPACING + col * BRICK_WIDTH - BRICK_SPACING / 2.0;
    let y = BRICK_HEIGHT * 3.0 + (row + 1.0) * BRICK_SPACING + row * BRICK_HEIGHT
        - BRICK_SPACING / 2.0;

    Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_rect_is_deterministic() {
        for i in 0..BRICK_COUNT {
            assert_eq!(brick_rect(i), brick_rect(i), "index {i}");
        }
    }

    #[test]
    fn test_brick_rect_within_play_area() {
        for i in 0..BRICK_COUNT {
            let r = brick_rect(i);
            assert!(r.x >= 0.0, "index {i} left edge {}", r.x);
            assert!(r.right() <= PLAY_WIDTH, "index {i} right edge {}", r.right());
            assert!(r.y >= 0.0, "index {i} top edge {}", r.y);
            assert!(r.bottom() <= PLAY_HEIGHT, "index {i} bottom edge {}", r.bottom());
        }
    }

    #[test]
    fn test_index_mapping_uses_modulo_on_both_axes() {
        // Index 12 sits in column 1 (12 % 11) and row 5 (12 % 7), not the
        // row-major (row 1, column 1).
        let r = brick_rect(12);
        let expected_x = 2.0 * BRICK_SPACING + BRICK_WIDTH - BRICK_SPACING / 2.0;
        let expected_y =
            BRICK_HEIGHT * 3.0 + 6.0 * BRICK_SPACING + 5.0 * BRICK_HEIGHT - BRICK_SPACING / 2.0;
        assert_eq!(r.x, expected_x);
        assert_eq!(r.y, expected_y);
    }

    #[test]
    fn test_first_brick_position() {
        let r = brick_rect(0);
        assert_eq!(r.x, BRICK_SPACING / 2.0);
        assert_eq!(r.y, BRICK_HEIGHT * 3.0 + BRICK_SPACING / 2.0);
        assert_eq!(r.w, BRICK_WIDTH);
        assert_eq!(r.h, BRICK_HEIGHT);
    }

    #[test]
    fn test_columns_do_not_overlap() {
        // Adjacent columns in the same row leave a spacing gap
        let a = brick_rect(0);
        let b = brick_rect(1);
        assert!(a.right() < b.x);
    }
}
