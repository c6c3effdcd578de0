//! Axis-aligned pixel rectangles and the clockwise quadrant convention

use std::ops::Range;

/// Quadrants of a rectangle in clockwise order starting at the upper-left
///
/// The order matches the sibling-adjacency scan of the merge phase:
/// 0 = upper-left, 1 = upper-right, 2 = lower-right, 3 = lower-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// Quadrant at the parent's origin
    UpperLeft,
    /// One step clockwise from the upper-left
    UpperRight,
    /// Diagonally opposite the origin
    LowerRight,
    /// One step counter-clockwise from the upper-left
    LowerLeft,
}

impl Quadrant {
    /// All four quadrants in clockwise scan order
    pub const CLOCKWISE: [Self; 4] = [
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerRight,
        Self::LowerLeft,
    ];

    /// Position of this quadrant in the clockwise order
    pub const fn index(self) -> usize {
        match self {
            Self::UpperLeft => 0,
            Self::UpperRight => 1,
            Self::LowerRight => 2,
            Self::LowerLeft => 3,
        }
    }

    /// Quadrant at the given clockwise position, wrapping modulo four
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::UpperLeft,
            1 => Self::UpperRight,
            2 => Self::LowerRight,
            _ => Self::LowerLeft,
        }
    }
}

/// Axis-aligned rectangle in pixel coordinates
///
/// `x` selects columns and `y` selects rows of the raster; the rectangle
/// covers the half-open spans `x..x + width` and `y..y + height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Leftmost column
    pub x: usize,
    /// Topmost row
    pub y: usize,
    /// Number of columns covered
    pub width: usize,
    /// Number of rows covered
    pub height: usize,
}

impl Rect {
    /// Create a rectangle from its origin and extent
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Row span covered by this rectangle
    pub const fn rows(&self) -> Range<usize> {
        self.y..self.y + self.height
    }

    /// Column span covered by this rectangle
    pub const fn cols(&self) -> Range<usize> {
        self.x..self.x + self.width
    }

    /// One of the four half-size sub-rectangles
    ///
    /// Halving uses integer division: for odd parent dimensions the remainder
    /// column and row are covered by no quadrant, so the union of the four
    /// quadrants is up to one row and one column smaller than the parent.
    /// This truncation is deliberate reference behavior, not rounding error.
    pub const fn quadrant(&self, which: Quadrant) -> Self {
        let half_width = self.width / 2;
        let half_height = self.height / 2;

        let (x, y) = match which {
            Quadrant::UpperLeft => (self.x, self.y),
            Quadrant::UpperRight => (self.x + half_width, self.y),
            Quadrant::LowerRight => (self.x + half_width, self.y + half_height),
            Quadrant::LowerLeft => (self.x, self.y + half_height),
        };

        Self::new(x, y, half_width, half_height)
    }
}
