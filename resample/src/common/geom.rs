//! Integer pixel geometry.

use std::fmt;

pub use glam::IVec2 as Point;

/// Width and height of a pixel region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Half-open pixel rectangle: `min` is inclusive, `max` is exclusive.
///
/// A rectangle whose `max` is not strictly greater than `min` on either axis
/// is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Creates a rectangle from two corners, swapping coordinates as needed
    /// so that `min <= max` on both axes.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Rectangle with its minimum corner at `origin`.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            min: origin,
            max: origin + Point::new(size.width as i32, size.height as i32),
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ZERO, size)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Size with negative extents clamped to zero.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width().max(0) as u32, self.height().max(0) as u32)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Largest rectangle contained in both. Disjoint inputs give [`Rect::EMPTY`].
    pub fn intersect(&self, other: &Rect) -> Rect {
        let result = Rect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        };
        if result.is_empty() {
            Rect::EMPTY
        } else {
            result
        }
    }

    #[inline]
    pub fn translate(&self, offset: Point) -> Rect {
        Rect {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// True if every point of `self` is inside `other`. An empty rectangle is
    /// within every rectangle.
    pub fn is_within(&self, other: &Rect) -> bool {
        if self.is_empty() {
            return true;
        }
        other.min.x <= self.min.x
            && self.max.x <= other.max.x
            && other.min.y <= self.min.y
            && self.max.y <= other.max.y
    }

    /// Row-major iterator over every point of the rectangle.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let rect = if self.is_empty() { Rect::EMPTY } else { *self };
        (rect.min.y..rect.max.y)
            .flat_map(move |y| (rect.min.x..rect.max.x).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
