// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangle defined by position and size.

use core::ops::{Add, Sub};

use crate::error::{GridError, Result};
use crate::vector::Vector2;

/// Axis-aligned rectangle with a non-negative size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect<T> {
    /// Top-left corner.
    pub position: Vector2<T>,
    /// Width (`x`) and height (`y`).
    pub size: Vector2<T>,
}

impl<T: Copy + PartialOrd + Default> Rect<T> {
    /// Create a rectangle from its top-left corner and size.
    ///
    /// Debug builds assert that neither size component is negative.
    #[inline]
    pub fn new(position: Vector2<T>, size: Vector2<T>) -> Self {
        debug_assert!(
            size.x >= T::default() && size.y >= T::default(),
            "Rect size must be non-negative"
        );
        Self { position, size }
    }

    /// Create a rectangle, rejecting a negative size.
    pub fn try_new(position: Vector2<T>, size: Vector2<T>) -> Result<Self> {
        let zero = T::default();
        if size.x < zero || size.y < zero {
            return Err(GridError::InvalidArgument("Rect: size must be non-negative"));
        }
        Ok(Self { position, size })
    }
}

impl<T: Copy + PartialOrd + Default + Sub<Output = T>> Rect<T> {
    /// Create a rectangle from its edges.
    #[inline]
    pub fn from_ltrb(left: T, top: T, right: T, bottom: T) -> Self {
        Self::new(Vector2::new(left, top), Vector2::new(right - left, bottom - top))
    }
}

impl<T: Copy + PartialOrd + Add<Output = T>> Rect<T> {
    /// Left edge.
    #[inline]
    pub fn left(&self) -> T {
        self.position.x
    }

    /// Top edge.
    #[inline]
    pub fn top(&self) -> T {
        self.position.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> T {
        self.position.x + self.size.x
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> T {
        self.position.y + self.size.y
    }

    /// Whether the point lies inside the rectangle. All four edges are inclusive.
    #[inline]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        self.left() <= point.x
            && point.x <= self.right()
            && self.top() <= point.y
            && point.y <= self.bottom()
    }
}

impl From<kurbo::Rect> for Rect<f64> {
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self {
            position: Vector2::new(r.x0, r.y0),
            size: Vector2::new(r.width(), r.height()),
        }
    }
}

impl From<Rect<f64>> for kurbo::Rect {
    fn from(r: Rect<f64>) -> Self {
        Self::new(r.left(), r.top(), r.right(), r.bottom())
    }
}

/// Integer rectangle.
pub type IntRect = Rect<i32>;
/// Single-precision rectangle.
pub type FloatRect = Rect<f32>;
/// Double-precision rectangle.
pub type DoubleRect = Rect<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = IntRect::from_ltrb(10, 20, 40, 30);
        assert_eq!(r.size, Vector2::new(30, 10));
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (10, 20, 40, 30));
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let r = FloatRect::from_ltrb(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Vector2::new(0.0, 0.0)));
        assert!(r.contains(Vector2::new(100.0, 100.0)));
        assert!(r.contains(Vector2::new(50.0, 0.5)));
        assert!(!r.contains(Vector2::new(100.5, 50.0)));
        assert!(!r.contains(Vector2::new(50.0, -0.1)));
    }

    #[test]
    fn try_new_rejects_negative_size() {
        assert!(matches!(
            FloatRect::try_new(Vector2::new(0.0, 0.0), Vector2::new(-1.0, 1.0)),
            Err(GridError::InvalidArgument(_))
        ));
        assert!(FloatRect::try_new(Vector2::new(0.0, 0.0), Vector2::new(0.0, 1.0)).is_ok());
    }

    #[test]
    fn kurbo_round_trip() {
        let k = kurbo::Rect::new(5.0, 10.0, 25.0, 15.0);
        let r = DoubleRect::from(k);
        assert_eq!(r.position, Vector2::new(5.0, 10.0));
        assert_eq!(r.size, Vector2::new(20.0, 5.0));
        assert_eq!(kurbo::Rect::from(r), k);
    }
}
