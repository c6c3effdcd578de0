//! Tests for rectangle geometry and the clockwise quadrant convention

use quadseg::spatial::rect::{Quadrant, Rect};

#[test]
fn test_even_rectangle_quadrants_tile_the_parent() {
    let parent = Rect::new(2, 4, 8, 8);

    assert_eq!(parent.quadrant(Quadrant::UpperLeft), Rect::new(2, 4, 4, 4));
    assert_eq!(parent.quadrant(Quadrant::UpperRight), Rect::new(6, 4, 4, 4));
    assert_eq!(parent.quadrant(Quadrant::LowerRight), Rect::new(6, 8, 4, 4));
    assert_eq!(parent.quadrant(Quadrant::LowerLeft), Rect::new(2, 8, 4, 4));

    let tiled_area: usize = Quadrant::CLOCKWISE
        .into_iter()
        .map(|which| parent.quadrant(which).area())
        .sum();
    assert_eq!(tiled_area, parent.area());
}

#[test]
fn test_odd_dimensions_truncate_the_remainder() {
    // 5x5 halves to 2x2 quadrants: one row and one column stay uncovered,
    // which is the documented reference behavior
    let parent = Rect::new(0, 0, 5, 5);

    for which in Quadrant::CLOCKWISE {
        let quadrant = parent.quadrant(which);
        assert_eq!((quadrant.width, quadrant.height), (2, 2));
    }

    assert_eq!(parent.quadrant(Quadrant::LowerRight), Rect::new(2, 2, 2, 2));

    let tiled_area: usize = Quadrant::CLOCKWISE
        .into_iter()
        .map(|which| parent.quadrant(which).area())
        .sum();
    assert_eq!(tiled_area, 16);
    assert_eq!(parent.area(), 25);
}

#[test]
fn test_quadrant_indices_follow_the_clockwise_order() {
    for (expected, which) in Quadrant::CLOCKWISE.into_iter().enumerate() {
        assert_eq!(which.index(), expected);
        assert_eq!(Quadrant::from_index(expected), which);
    }

    // Wrapping keeps adjacency arithmetic total
    assert_eq!(Quadrant::from_index(5), Quadrant::UpperRight);
}

#[test]
fn test_spans_cover_the_half_open_extent() {
    let rect = Rect::new(3, 1, 4, 2);

    assert_eq!(rect.rows(), 1..3);
    assert_eq!(rect.cols(), 3..7);
    assert_eq!(rect.area(), 8);
    assert!(!rect.is_empty());
    assert!(Rect::new(3, 1, 0, 2).is_empty());
}
