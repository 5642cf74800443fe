pub mod floating;
pub mod passability;
pub mod placement;
pub mod region;

pub use passability::{blocking_rects, unwalkable_rects};
pub use placement::{ResizeEdge, residual_overlaps, resolve_placement};
pub use region::{intersection, intersects, mtv_offset, subtract, subtract_all};

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Numeric type a [`Rect`] can be expressed in.
///
/// Windows live on the integer grid, the player entity moves continuously, and
/// both share the same region algebra.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;

    fn half(self) -> Self;
}

impl Scalar for i32 {
    const ZERO: Self = 0;

    fn half(self) -> Self {
        self / 2
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;

    fn half(self) -> Self {
        self / 2.0
    }
}

pub(crate) fn max_s<T: Scalar>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

pub(crate) fn min_s<T: Scalar>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    pub fn offset(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn delta_to(self, other: Self) -> Self {
        Self::new(other.x - self.x, other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size<T = i32> {
    pub width: T,
    pub height: T,
}

impl<T: Scalar> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with a signed origin and a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect<T = i32> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Scalar> Rect<T> {
    /// Negative sizes are clamped to zero.
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width: max_s(width, T::ZERO),
            height: max_s(height, T::ZERO),
        }
    }

    pub fn from_parts(position: Point<T>, size: Size<T>) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn position(&self) -> Point<T> {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }

    pub fn end_x(&self) -> T {
        self.x + self.width
    }

    pub fn end_y(&self) -> T {
        self.y + self.height
    }

    pub fn end(&self) -> Point<T> {
        Point::new(self.end_x(), self.end_y())
    }

    pub fn center(&self) -> Point<T> {
        Point::new(self.x + self.width.half(), self.y + self.height.half())
    }

    pub fn is_empty(&self) -> bool {
        self.width <= T::ZERO || self.height <= T::ZERO
    }

    pub fn translate(&self, offset: Point<T>) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    pub fn with_position(&self, position: Point<T>) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..*self
        }
    }

    /// Half-open containment: the far edges belong to the neighbour.
    pub fn contains(&self, point: Point<T>) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x < self.end_x()
            && point.y >= self.y
            && point.y < self.end_y()
    }
}

impl Rect<i32> {
    pub fn to_f64(self) -> Rect<f64> {
        Rect {
            x: f64::from(self.x),
            y: f64::from(self.y),
            width: f64::from(self.width),
            height: f64::from(self.height),
        }
    }
}

impl Rect<f64> {
    /// Grid cells touched by this rect, origin floored and end ceiled.
    pub fn to_grid(self) -> Rect<i32> {
        let x = self.x.floor() as i32;
        let y = self.y.floor() as i32;
        let end_x = self.end_x().ceil() as i32;
        let end_y = self.end_y().ceil() as i32;
        Rect::new(x, y, end_x - x, end_y - y)
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_size_is_clamped() {
        let r = Rect::new(5, 5, -3, 4);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 4);
        assert!(r.is_empty());
    }

    #[test]
    fn end_and_center() {
        let r = Rect::new(10, 20, 30, 41);
        assert_eq!(r.end(), Point::new(40, 61));
        // integer center truncates the half size
        assert_eq!(r.center(), Point::new(25, 40));
        let f = Rect::new(0.0, 0.0, 3.0, 1.0);
        assert_eq!(f.center(), Point::new(1.5, 0.5));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(1, 1, 3, 3);
        assert!(r.contains(Point::new(1, 1)));
        assert!(r.contains(Point::new(3, 3)));
        assert!(!r.contains(Point::new(4, 1)));
        assert!(!Rect::new(0, 0, 0, 5).contains(Point::new(0, 0)));
    }

    #[test]
    fn to_grid_covers_partial_cells() {
        let r = Rect::new(1.5, 2.0, 2.0, 1.0);
        assert_eq!(r.to_grid(), Rect::new(1, 2, 3, 1));
    }

    #[test]
    fn translate_keeps_size() {
        let r = Rect::new(0, 0, 4, 2).translate(Point::new(-3, 7));
        assert_eq!(r, Rect::new(-3, 7, 4, 2));
    }
}
